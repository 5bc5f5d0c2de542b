// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::mem::size_of;

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000, 10_000_000];

fn sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for len in LENGTHS {
        group.throughput(Throughput::Bytes((len * size_of::<u64>()) as u64));
        group.bench_with_input(BenchmarkId::new("iterators", len), len, iterators::sum);
        group.bench_with_input(BenchmarkId::new("rangelite", len), len, rangelite::sum);
    }
    group.finish();
}

fn filter_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_map");
    for len in LENGTHS {
        group.throughput(Throughput::Bytes((len * size_of::<u64>()) as u64));
        group.bench_with_input(
            BenchmarkId::new("iterators", len),
            len,
            iterators::filter_map,
        );
        group.bench_with_input(
            BenchmarkId::new("rangelite", len),
            len,
            rangelite::filter_map,
        );
    }
    group.finish();
}

fn group_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_runs");
    for len in LENGTHS {
        group.throughput(Throughput::Bytes((len * size_of::<u64>()) as u64));
        group.bench_with_input(
            BenchmarkId::new("iterators", len),
            len,
            iterators::group_runs,
        );
        group.bench_with_input(
            BenchmarkId::new("rangelite", len),
            len,
            rangelite::group_runs,
        );
    }
    group.finish();
}

/// Input with runs of equal values, of lengths 1 to 7.
fn runs_input(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i / (1 + i % 7)).collect()
}

/// Baseline benchmarks using std iterators.
mod iterators {
    use criterion::{black_box, Bencher};

    pub fn sum(bencher: &mut Bencher, len: &usize) {
        let input = (0..*len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| black_box(input_slice).iter().sum::<u64>());
    }

    pub fn filter_map(bencher: &mut Bencher, len: &usize) {
        let input = (0..*len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| {
            black_box(input_slice)
                .iter()
                .filter(|x| **x % 3 != 0)
                .map(|x| x * x)
                .collect::<Vec<u64>>()
        });
    }

    pub fn group_runs(bencher: &mut Bencher, len: &usize) {
        let input = super::runs_input(*len);
        let input_slice = input.as_slice();
        bencher.iter(|| {
            black_box(input_slice)
                .chunk_by(|a, b| a == b)
                .map(|run| run.len())
                .max()
        });
    }
}

/// Benchmarks using Rangelite.
mod rangelite {
    use criterion::{black_box, Bencher};
    use rangelite::{all, ViewExt};

    pub fn sum(bencher: &mut Bencher, len: &usize) {
        let input = (0..*len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| all(black_box(input_slice)).accumulate(|acc, x| acc + x, 0u64));
    }

    pub fn filter_map(bencher: &mut Bencher, len: &usize) {
        let input = (0..*len as u64).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| {
            all(black_box(input_slice))
                .keep_if(|x| **x % 3 != 0)
                .map(|x| x * x)
                .to_vector()
        });
    }

    pub fn group_runs(bencher: &mut Bencher, len: &usize) {
        let input = super::runs_input(*len);
        let input_slice = input.as_slice();
        bencher.iter(|| {
            all(black_box(input_slice))
                .group_by(|a, b| a == b)
                .map(|run| run.distance())
                .max()
        });
    }
}

criterion_group!(benches, sum, filter_map, group_runs);
criterion_main!(benches);
