// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Callable configurations stored by the stages of a pipeline.
//!
//! Stages are generic over the small traits of this module rather than
//! directly over closures, so that the combinators built on top of them
//! ([`remove_if()`](super::ViewExt::remove_if),
//! [`dereference()`](super::ViewExt::dereference),
//! [`enumerate()`](super::ViewExt::enumerate), etc.) produce nameable types.
//! Every closure with the right signature implements these traits.
//!
//! Each cursor owns a clone of its stage's callable, hence the [`Clone`]
//! super-trait bounds. Closures that only capture references or [`Copy`]
//! values are cheap to clone.

use super::item::{Dereference, Maybe, Pair};

/// A function applied to each element by [`map()`](super::ViewExt::map).
pub trait Transform<A>: Clone {
    /// Type of the transformed elements.
    type Output;

    /// Applies this function to the given element.
    fn apply(&self, item: A) -> Self::Output;
}

impl<A, R, F> Transform<A> for F
where
    F: Fn(A) -> R + Clone,
{
    type Output = R;

    #[inline(always)]
    fn apply(&self, item: A) -> R {
        self(item)
    }
}

/// A predicate tested by [`keep_if()`](super::ViewExt::keep_if) and friends.
pub trait Predicate<A>: Clone {
    /// Returns whether the given element satisfies this predicate.
    fn test(&self, item: &A) -> bool;
}

impl<A, F> Predicate<A> for F
where
    F: Fn(&A) -> bool + Clone,
{
    #[inline(always)]
    fn test(&self, item: &A) -> bool {
        self(item)
    }
}

/// The relation deciding whether a candidate element belongs to the group
/// started by another element, in [`group_by()`](super::ViewExt::group_by).
pub trait Relation<A>: Clone {
    /// Returns whether `candidate` belongs to the group started by `first`.
    fn related(&self, first: &A, candidate: &A) -> bool;
}

impl<A, F> Relation<A> for F
where
    F: Fn(&A, &A) -> bool + Clone,
{
    #[inline(always)]
    fn related(&self, first: &A, candidate: &A) -> bool {
        self(first, candidate)
    }
}

/// Negation of a predicate. Used by
/// [`remove_if()`](super::ViewExt::remove_if).
#[derive(Clone, Copy, Debug, Default)]
pub struct Not<P>(pub P);

impl<A, P: Predicate<A>> Predicate<A> for Not<P> {
    #[inline(always)]
    fn test(&self, item: &A) -> bool {
        !self.0.test(item)
    }
}

/// Predicate matching empty optional elements. Used by
/// [`cat_maybes()`](super::ViewExt::cat_maybes).
#[derive(Clone, Copy, Debug, Default)]
pub struct IsNothing;

impl<A: Maybe> Predicate<A> for IsNothing {
    #[inline(always)]
    fn test(&self, item: &A) -> bool {
        item.is_nothing()
    }
}

/// Dereferences each element. Used by
/// [`dereference()`](super::ViewExt::dereference).
#[derive(Clone, Copy, Debug, Default)]
pub struct Dereferenced;

impl<A: Dereference> Transform<A> for Dereferenced {
    type Output = A::Target;

    #[inline(always)]
    fn apply(&self, item: A) -> A::Target {
        item.dereference()
    }
}

/// Projects the first component of a pair. Used by
/// [`keys()`](super::ViewExt::keys).
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOf;

impl<A: Pair> Transform<A> for FirstOf {
    type Output = A::First;

    #[inline(always)]
    fn apply(&self, item: A) -> A::First {
        item.first()
    }
}

/// Swaps the two components of a pair. Used by
/// [`enumerate()`](super::ViewExt::enumerate).
#[derive(Clone, Copy, Debug, Default)]
pub struct SwapPair;

impl<A, B> Transform<(A, B)> for SwapPair {
    type Output = (B, A);

    #[inline(always)]
    fn apply(&self, (a, b): (A, B)) -> (B, A) {
        (b, a)
    }
}

/// Flattens a nested pair into a triple. Used by
/// [`zip3()`](super::ViewExt::zip3).
#[derive(Clone, Copy, Debug, Default)]
pub struct Flatten3;

impl<A, B, C> Transform<((A, B), C)> for Flatten3 {
    type Output = (A, B, C);

    #[inline(always)]
    fn apply(&self, ((a, b), c): ((A, B), C)) -> (A, B, C) {
        (a, b, c)
    }
}

/// Pairs each element with the value a function derives from it. Used by
/// [`map2val()`](super::ViewExt::map2val).
#[derive(Clone, Copy, Debug, Default)]
pub struct ToPair<F>(pub F);

impl<A, R, F> Transform<A> for ToPair<F>
where
    F: Fn(&A) -> R + Clone,
{
    type Output = (A, R);

    #[inline(always)]
    fn apply(&self, item: A) -> (A, R) {
        let value = (self.0)(&item);
        (item, value)
    }
}

/// Relates two elements when a key function maps them to equal keys. Used by
/// [`group_on()`](super::ViewExt::group_on).
#[derive(Clone, Copy, Debug, Default)]
pub struct SameKey<F>(pub F);

impl<A, K, F> Relation<A> for SameKey<F>
where
    F: Fn(&A) -> K + Clone,
    K: PartialEq,
{
    #[inline(always)]
    fn related(&self, first: &A, candidate: &A) -> bool {
        (self.0)(first) == (self.0)(candidate)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_callables() {
        let double = |x: i32| x * 2;
        assert_eq!(double.apply(21), 42);

        let is_even = |x: &i32| *x % 2 == 0;
        assert!(is_even.test(&4));
        assert!(!Not(is_even).test(&4));

        let same_parity = |a: &i32, b: &i32| a % 2 == b % 2;
        assert!(same_parity.related(&1, &3));
        assert!(!same_parity.related(&1, &2));
    }

    #[test]
    fn named_callables() {
        assert!(IsNothing.test(&None::<i32>));
        assert!(!IsNothing.test(&Some(1)));
        assert_eq!(Dereferenced.apply(&Box::new(7)), &7);
        assert_eq!(FirstOf.apply(&(1, 'a')), &1);
        assert_eq!(SwapPair.apply((1, 'a')), ('a', 1));
        assert_eq!(Flatten3.apply(((1, 'a'), "b")), (1, 'a', "b"));
        assert_eq!(ToPair(|x: &i32| x * 10).apply(3), (3, 30));
        assert!(SameKey(|s: &&str| s.len()).related(&"abc", &"xyz"));
        assert!(!SameKey(|s: &&str| s.len()).related(&"abc", &"xy"));
    }
}
