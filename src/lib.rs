// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

mod macros;
mod view;

pub use view::{
    all, func, generate_n, input, ints, ints_from, item, rall, zip, zip3, AllView, Attach, Cache1,
    Cache1Cursor, Create, Cursor, Cycle, CycleCursor, DropN, DropWhile, GenerateCursor,
    GenerateView, Group, GroupBy, GroupByCursor, GroupCursor, IdentityCursor, Intersperse,
    IntersperseCursor, IntoView, IntsView, Iter, KeepIf, KeepIfCursor, Map, MapCursor, Reverse,
    ReverseAllView, ReversibleView, TakeCursor, TakeN, TakeWhile, TakeWhileCursor, TakeWhileIncl,
    TakeWhileInclCursor, View, ViewExt, Zip, ZipCursor,
};

#[cfg(test)]
mod test {
    use super::func::{Dereferenced, IsNothing, Not};
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn init_logging() {
        #[cfg(feature = "log")]
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn construction_is_lazy() {
        init_logging();
        let calls = Cell::new(0);
        let input = vec![1, 2, 3, 4, 5];
        let view = all(&input)
            .map(|x| {
                calls.set(calls.get() + 1);
                x * 2
            })
            .keep_if(|x| {
                calls.set(calls.get() + 1);
                x % 4 == 0
            })
            .take_while(|_| {
                calls.set(calls.get() + 1);
                true
            })
            .group_by(|_, _| {
                calls.set(calls.get() + 1);
                true
            })
            .cycle();
        assert_eq!(calls.get(), 0);
        drop(view);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn iteration_pulls_one_element_at_a_time() {
        init_logging();
        let calls = Cell::new(0);
        let view = ints_from(0).map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        let mut iter = view.iter();
        assert_eq!(calls.get(), 0);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(calls.get(), 1);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn order_preservation() {
        init_logging();
        let input = vec![1, 2, 3, 4, 5];
        let squares = all(&input)
            .keep_if(|x| **x % 2 == 0)
            .map(|x| x * x)
            .to_vector();
        assert_eq!(squares, vec![4, 16]);

        let expected = input
            .iter()
            .skip(1)
            .filter(|x| **x != 3)
            .map(|x| x + 100)
            .take(2)
            .collect::<Vec<_>>();
        let actual = all(&input)
            .drop(1)
            .keep_if(|x| **x != 3)
            .map(|x| x + 100)
            .take(2)
            .to_vector();
        assert_eq!(actual, expected);
    }

    #[test]
    fn take_drop_complementarity() {
        init_logging();
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.random_range(0..50);
            let input = (0..len).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
            let n = rng.random_range(0..=len);

            let mut rebuilt = all(&input).take(n).to_vector();
            rebuilt.extend(all(&input).drop(n).to_vector());
            assert_eq!(rebuilt, input.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn random_pipelines_match_std_iterators() {
        init_logging();
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.random_range(0..100);
            let input = (0..len)
                .map(|_| rng.random_range(0..20))
                .collect::<Vec<u32>>();
            let modulus = rng.random_range(1..5);
            let threshold = rng.random_range(0..20);
            let n = rng.random_range(0..len + 1);

            let expected = input
                .iter()
                .skip_while(|x| **x < threshold)
                .filter(|x| **x % modulus == 0)
                .map(|x| x * 3)
                .take(n)
                .collect::<Vec<_>>();
            let actual = all(&input)
                .drop_while(|x| **x < threshold)
                .keep_if(|x| **x % modulus == 0)
                .map(|x| x * 3)
                .take(n)
                .to_vector();
            assert_eq!(actual, expected);

            let expected_sum = input.iter().filter(|x| **x > threshold).sum::<u32>();
            let actual_sum = all(&input)
                .remove_if(|x| **x <= threshold)
                .accumulate(|acc, x| acc + x, 0);
            assert_eq!(actual_sum, expected_sum);
        }
    }

    #[test]
    fn take_while_versus_incl() {
        init_logging();
        let input = vec![1, 3, 5, 4, 7];
        let is_odd = |x: &&i32| **x % 2 == 1;
        assert_eq!(all(&input).take_while(is_odd).to_vector(), vec![&1, &3, &5]);
        assert_eq!(
            all(&input).take_while_incl(is_odd).to_vector(),
            vec![&1, &3, &5, &4]
        );
    }

    #[test]
    fn zip_shortest_wins() {
        init_logging();
        let long = vec![1, 2, 3, 4, 5];
        let short = vec![6, 7, 8];
        assert_eq!(zip(&long, &short).distance(), 3);
        assert_eq!(zip(&short, &long).distance(), 3);
    }

    #[test]
    fn cycle_take_is_bounded() {
        init_logging();
        let input = vec![1, 2, 3];
        assert_eq!(
            all(&input).cycle().take(7).map(|x| *x).to_vector(),
            vec![1, 2, 3, 1, 2, 3, 1]
        );
    }

    #[test]
    fn min_by_keeps_earliest() {
        init_logging();
        let input = vec![(1, "a"), (1, "b")];
        assert_eq!(all(&input).min_by(|pair| pair.0), Some(&(1, "a")));
        assert_eq!(all(&input).max_by(|pair| pair.0), Some(&(1, "a")));
    }

    #[test]
    fn accumulate_empty() {
        init_logging();
        let empty: Vec<i32> = Vec::new();
        assert_eq!(all(&empty).accumulate(|acc, x| acc + x, 42), 42);
        assert_eq!(all(&empty).map(|x| *x).accumulate_monoid(|a, b| a + b), None);
    }

    #[test]
    fn materialization_is_idempotent() {
        init_logging();
        let input = vec![5, 3, 8, 1];
        let build = || all(&input).keep_if(|x| **x > 2).map(|x| x - 1);
        assert_eq!(build().to_vector(), build().to_vector());
        let view = build();
        assert_eq!(view.to_vector(), view.to_vector());
    }

    #[test]
    fn reverse_symmetry() {
        init_logging();
        let input = vec![1, 2, 3, 4, 5, 6];
        let build = || {
            all(&input)
                .keep_if(|x| **x != 4)
                .map(|x| x * 10)
                .cache1()
                .intersperse(0)
        };
        let mut forward = build().to_vector();
        forward.reverse();
        assert_eq!(build().reverse().to_vector(), forward);
        assert_eq!(build().rev_iter().collect::<Vec<_>>(), forward);
    }

    #[test]
    fn describe_then_attach() {
        init_logging();
        let mut view = input::<[i32]>()
            .remove_if(|x| **x < 0)
            .map(|x| x * 2)
            .intersperse(-1);
        let first = [3, -4, 5];
        view.attach(&first[..]);
        assert_eq!(view.to_vector(), vec![6, -1, 10]);
        let second = [-1, 7];
        view.attach(&second[..]);
        assert_eq!(view.to_vector(), vec![14]);
    }

    #[test]
    fn create_from_type() {
        init_logging();
        type Values<'a> = Map<KeepIf<AllView<'a, Vec<Option<i32>>>, Not<IsNothing>>, Dereferenced>;
        type Reversed<'a> = Reverse<Values<'a>>;

        let data = vec![Some(1), None, Some(3), None];
        assert_eq!(Values::create(&data).to_vector(), vec![&1, &3]);
        assert_eq!(Reversed::create(&data).to_vector(), vec![&3, &1]);
        // The same type as built from the combinators.
        let built: Values<'_> = all(&data).cat_maybes();
        assert_eq!(built.to_vector(), vec![&1, &3]);
    }

    #[test]
    fn derived_combinators() {
        init_logging();
        let pairs = vec![(String::from("x"), 1), (String::from("y"), 2)];
        assert_eq!(all(&pairs).keys().to_vector(), vec!["x", "y"]);

        let boxes = vec![Box::new(1), Box::new(2)];
        assert_eq!(all(&boxes).dereference().to_vector(), vec![&1, &2]);

        let shared = vec![Rc::new('a'), Rc::new('b')];
        assert_eq!(all(&shared).dereference().map(|c| *c).to_string(), "ab");

        let maybes = vec![None, Some(String::from("z")), None];
        assert_eq!(all(&maybes).cat_maybes().to_vector(), vec!["z"]);

        let owned = all(&maybes).map(|m| m.clone()).cat_maybes().to_vector();
        assert_eq!(owned, vec![String::from("z")]);
    }

    #[test]
    fn nested_pipelines() {
        init_logging();
        let matrix = vec![vec![1, 2], vec![], vec![3]];
        let sums = all(&matrix)
            .map(|row| all(row).accumulate(|acc, x| acc + x, 0))
            .enumerate_from(1)
            .to_vector();
        assert_eq!(sums, vec![(1, 3), (2, 0), (3, 3)]);

        let longest = all(&matrix).max_by(|row| row.len());
        assert_eq!(longest, Some(&vec![1, 2]));
    }

    #[test]
    fn generated_sources() {
        init_logging();
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let rolls = generate_n(move || rng.random_range(1..=6), 20);
        let first = rolls.to_vector();
        assert_eq!(first.len(), 20);
        assert!(all(&first).keep_if(|x| !(1..=6).contains(*x)).head().is_none());
        // Each traversal restarts from a fresh copy of the generator.
        assert_eq!(rolls.to_vector(), first);
    }
}
