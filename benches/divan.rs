// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

fn main() {
    divan::main();
}

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000];

/// Baseline benchmarks using std iterators.
mod iterators {
    use super::LENGTHS;
    use divan::counter::BytesCount;
    use divan::{black_box, Bencher};

    #[divan::bench(args = LENGTHS)]
    fn sum(bencher: Bencher, len: usize) {
        let input = (0..len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| black_box(input_slice).iter().sum::<u64>())
    }

    #[divan::bench(args = LENGTHS)]
    fn filter_map(bencher: Bencher, len: usize) {
        let input = (0..len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| {
                black_box(input_slice)
                    .iter()
                    .filter(|x| **x % 3 != 0)
                    .map(|x| x * x)
                    .collect::<Vec<u64>>()
            })
    }

    #[divan::bench(args = LENGTHS)]
    fn zip_add(bencher: Bencher, len: usize) {
        let left = (0..len as u64).collect::<Vec<u64>>();
        let right = (0..len as u64).collect::<Vec<u64>>();
        let left_slice = left.as_slice();
        let right_slice = right.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len * 2))
            .bench_local(|| {
                black_box(left_slice)
                    .iter()
                    .zip(black_box(right_slice))
                    .fold(0, |acc, (a, b)| acc + a * b)
            })
    }

    #[divan::bench(args = LENGTHS)]
    fn cycle_take(bencher: Bencher, len: usize) {
        let input = (0..100).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| {
                black_box(input_slice)
                    .iter()
                    .cycle()
                    .take(len)
                    .max()
            })
    }
}

/// Benchmarks using Rangelite.
mod rangelite {
    use super::LENGTHS;
    use divan::counter::BytesCount;
    use divan::{black_box, Bencher};
    use rangelite::{all, zip, ViewExt};

    #[divan::bench(args = LENGTHS)]
    fn sum(bencher: Bencher, len: usize) {
        let input = (0..len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| all(black_box(input_slice)).accumulate(|acc, x| acc + x, 0u64))
    }

    #[divan::bench(args = LENGTHS)]
    fn filter_map(bencher: Bencher, len: usize) {
        let input = (0..len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| {
                all(black_box(input_slice))
                    .keep_if(|x| **x % 3 != 0)
                    .map(|x| x * x)
                    .to_vector()
            })
    }

    #[divan::bench(args = LENGTHS)]
    fn zip_add(bencher: Bencher, len: usize) {
        let left = (0..len as u64).collect::<Vec<u64>>();
        let right = (0..len as u64).collect::<Vec<u64>>();
        let left_slice = left.as_slice();
        let right_slice = right.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len * 2))
            .bench_local(|| {
                zip(black_box(left_slice), black_box(right_slice))
                    .accumulate(|acc, (a, b)| acc + a * b, 0u64)
            })
    }

    #[divan::bench(args = LENGTHS)]
    fn cycle_take(bencher: Bencher, len: usize) {
        let input = (0..100).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| all(black_box(input_slice)).cycle().take(len).max())
    }
}
