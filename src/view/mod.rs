// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazy views and the adaptors to compose them into pipelines.

mod detail;
pub mod func;
mod group;
pub mod item;
mod sink;
mod source;

use func::{Dereferenced, FirstOf, Flatten3, IsNothing, Not, SameKey, SwapPair, ToPair};
use item::{Dereference, Maybe, Pair};
use std::iter::FusedIterator;

pub use detail::{
    Cache1, Cache1Cursor, Cycle, CycleCursor, DropN, DropWhile, Intersperse, IntersperseCursor,
    KeepIf, KeepIfCursor, Map, MapCursor, Reverse, TakeCursor, TakeN, TakeWhile, TakeWhileCursor,
    TakeWhileIncl, TakeWhileInclCursor, Zip, ZipCursor,
};
pub use group::{Group, GroupBy, GroupByCursor, GroupCursor};
pub use source::{
    all, generate_n, input, ints, ints_from, rall, zip, zip3, AllView, GenerateCursor,
    GenerateView, IdentityCursor, IntsView, ReverseAllView,
};

/// The traversal state of one stage of a pipeline.
///
/// A cursor is created positioned at the first element that its stage
/// yields (or directly at the end if there is none), and then walks forward
/// one element at a time. Reading and advancing are split into
/// [`get()`](Self::get) and [`next()`](Self::next), so that stages can
/// inspect the current upstream element without consuming it.
///
/// Calling [`get()`](Self::get) or [`next()`](Self::next) on a cursor for
/// which [`end()`](Self::end) returns true is a programmer error.
pub trait Cursor: Clone {
    /// The type of elements that this cursor yields.
    type Item;

    /// An opaque token identifying the position of this cursor, used to
    /// compare two cursors walking the same view.
    type Pos: PartialEq;

    /// Returns the element this cursor currently points to. This has no side
    /// effects, but may re-evaluate upstream functions on every call.
    fn get(&self) -> Self::Item;

    /// Advances this cursor to the next element its stage yields.
    fn next(&mut self);

    /// Returns true if no more elements remain.
    fn end(&self) -> bool;

    /// Returns the position token of this cursor.
    fn pos(&self) -> Self::Pos;
}

/// A lazily evaluated sequence of elements.
///
/// A view never computes anything by itself: all the work happens when a
/// cursor obtained from [`cursor()`](Self::cursor) is walked.
pub trait View {
    /// The type of elements that this view yields.
    type Item;

    /// The cursor walking this view forward.
    type Cursor: Cursor<Item = Self::Item>;

    /// Creates a cursor positioned at the first element of this view.
    fn cursor(&self) -> Self::Cursor;
}

/// A view that can also be walked backward.
///
/// Adaptors implement this trait only when their upstream view does, so
/// reverse capability is lost for good as soon as one stage of a pipeline
/// doesn't support it.
pub trait ReversibleView: View {
    /// The cursor walking this view backward.
    type RevCursor: Cursor<Item = Self::Item>;

    /// Creates a cursor positioned at the last element of this view.
    fn rev_cursor(&self) -> Self::RevCursor;
}

/// A pipeline whose source container can be bound after the pipeline has been
/// described.
///
/// ```rust
/// # use rangelite::{input, Attach, ViewExt};
/// let mut view = input::<Vec<i32>>().map(|x| x * 10);
/// let data = vec![1, 2, 3];
/// view.attach(&data);
/// assert_eq!(view.to_vector(), vec![10, 20, 30]);
/// ```
pub trait Attach<'data> {
    /// The container type at the source of this pipeline.
    type Input: ?Sized + 'data;

    /// Binds the source of this pipeline to the given container.
    fn attach(&mut self, input: &'data Self::Input);
}

/// A pipeline that can be reconstituted from its type alone, given a source
/// container.
///
/// This is only possible when none of the stages holds state that cannot be
/// default-constructed: stages configured with closures or counts don't
/// implement this trait.
///
/// ```rust
/// # use rangelite::func::{Dereferenced, IsNothing, Not};
/// # use rangelite::{AllView, Create, KeepIf, Map, ViewExt};
/// type Values<'a> = Map<KeepIf<AllView<'a, Vec<Option<i32>>>, Not<IsNothing>>, Dereferenced>;
///
/// let data = vec![Some(1), None, Some(3)];
/// assert_eq!(Values::create(&data).to_vector(), vec![&1, &3]);
/// ```
pub trait Create<'data>: Attach<'data> + Sized {
    /// Creates this pipeline over the given container.
    fn create(input: &'data Self::Input) -> Self;
}

/// Trait for converting into a [`View`].
///
/// This is implemented for references to iterable containers, which are
/// wrapped into an [`AllView`], and for views themselves, which are returned
/// unchanged.
pub trait IntoView {
    /// Target view type.
    type View: View;

    /// Converts `self` into a view.
    fn into_view(self) -> Self::View;
}

/// An iterator walking a [`Cursor`]. This struct is created by the
/// [`iter()`](ViewExt::iter) and [`rev_iter()`](ViewExt::rev_iter) methods
/// on [`ViewExt`], and by iterating over a reference to a view.
///
/// Two iterators compare equal when they are both exhausted, or when they
/// point to the same position.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the next element without advancing.
    pub fn peek(&self) -> Option<C::Item> {
        if self.cursor.end() {
            None
        } else {
            Some(self.cursor.get())
        }
    }

    /// Returns true if this iterator is exhausted.
    pub fn is_end(&self) -> bool {
        self.cursor.end()
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cursor.end() {
            None
        } else {
            let item = self.cursor.get();
            self.cursor.next();
            Some(item)
        }
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

impl<C: Cursor> PartialEq for Iter<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.cursor.end(), other.cursor.end()) {
            (true, true) => true,
            (false, false) => self.cursor.pos() == other.cursor.pos(),
            _ => false,
        }
    }
}

/// Additional methods provided for types that implement [`View`].
///
/// Adaptor methods take the view by value and wrap it into a new stage, so a
/// partially built pipeline cannot be extended twice. Nothing is evaluated
/// until the pipeline is iterated or materialized.
///
/// ```rust
/// # use rangelite::{all, ViewExt};
/// let input = vec![1, 2, 3, 4, 5];
/// let squares = all(&input)
///     .keep_if(|x| *x % 2 == 0)
///     .map(|x| x * x)
///     .to_vector();
/// assert_eq!(squares, vec![4, 16]);
/// ```
pub trait ViewExt: View + Sized {
    /// Returns an iterator over the elements of this view.
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.cursor())
    }

    /// Returns an iterator over the elements of this view, from last to
    /// first.
    fn rev_iter(&self) -> Iter<Self::RevCursor>
    where
        Self: ReversibleView,
    {
        Iter::new(self.rev_cursor())
    }

    /// Keeps only the elements that satisfy the given predicate.
    fn keep_if<F>(self, pred: F) -> KeepIf<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        KeepIf::new(self, pred)
    }

    /// Alias of [`keep_if()`](Self::keep_if).
    fn filter<F>(self, pred: F) -> KeepIf<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        self.keep_if(pred)
    }

    /// Removes the elements that satisfy the given predicate.
    fn remove_if<F>(self, pred: F) -> KeepIf<Self, Not<F>>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        KeepIf::new(self, Not(pred))
    }

    /// Applies the given function to each element, lazily.
    ///
    /// The function may return a reference only if it borrows from the
    /// underlying container rather than from the element itself, which the
    /// borrow checker enforces.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![(1, 'a'), (2, 'b')];
    /// let letters: Vec<&char> = all(&input).map(|p| &p.1).to_vector();
    /// assert_eq!(letters, vec![&'a', &'b']);
    /// ```
    ///
    /// Returning a reference into a temporary element is rejected.
    ///
    /// ```compile_fail
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![(1, 'a'), (2, 'b')];
    /// let firsts = all(&input).map(|p| *p).map(|p| &p.0).to_vector();
    /// ```
    fn map<F, R>(self, func: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R + Clone,
    {
        Map::new(self, func)
    }

    /// Pairs each element with the value derived from it by the given
    /// function.
    fn map2val<F, R>(self, func: F) -> Map<Self, ToPair<F>>
    where
        F: Fn(&Self::Item) -> R + Clone,
    {
        Map::new(self, ToPair(func))
    }

    /// Yields elements while they satisfy the given predicate, stopping
    /// before the first element that doesn't.
    fn take_while<F>(self, pred: F) -> TakeWhile<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, pred)
    }

    /// Yields elements while they satisfy the given predicate, including the
    /// first element that doesn't.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 3, 5, 4, 7];
    /// let taken = all(&input).take_while_incl(|x| *x % 2 == 1).to_vector();
    /// assert_eq!(taken, vec![&1, &3, &5, &4]);
    /// ```
    fn take_while_incl<F>(self, pred: F) -> TakeWhileIncl<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhileIncl::new(self, pred)
    }

    /// Skips elements while they satisfy the given predicate, then yields
    /// all the remaining elements. The predicate isn't tested again once it
    /// failed.
    fn drop_while<F>(self, pred: F) -> DropWhile<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        DropWhile::new(self, pred)
    }

    /// Yields at most `n` elements.
    fn take(self, n: usize) -> TakeN<Self> {
        TakeN::new(self, n)
    }

    /// Skips the first `n` elements.
    fn drop(self, n: usize) -> DropN<Self> {
        DropN::new(self, n)
    }

    /// Skips the first element.
    fn tail(self) -> DropN<Self> {
        self.drop(1)
    }

    /// Pairs the elements of this view with those of another one, stopping
    /// as soon as either is exhausted.
    fn zip<W: IntoView>(self, other: W) -> Zip<Self, W::View> {
        Zip::new(self, other.into_view())
    }

    /// Groups the elements of this view with those of two other views into
    /// triples, stopping as soon as any is exhausted.
    #[allow(clippy::type_complexity)]
    fn zip3<W: IntoView, X: IntoView>(
        self,
        second: W,
        third: X,
    ) -> Map<Zip<Zip<Self, W::View>, X::View>, Flatten3> {
        Map::new(self.zip(second).zip(third), Flatten3)
    }

    /// Pairs each element with its index, counting from zero.
    fn enumerate(self) -> Map<Zip<Self, IntsView>, SwapPair> {
        self.enumerate_from(0)
    }

    /// Pairs each element with its index, counting from `start`.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec!['a', 'b'];
    /// let indexed = all(&input).enumerate_from(1).to_vector();
    /// assert_eq!(indexed, vec![(1, &'a'), (2, &'b')]);
    /// ```
    fn enumerate_from(self, start: i32) -> Map<Zip<Self, IntsView>, SwapPair> {
        Map::new(self.zip(ints_from(start)), SwapPair)
    }

    /// Inserts a copy of the given separator between consecutive elements.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Walks this view backward.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 2, 3];
    /// let reversed = all(&input).map(|x| x * 2).reverse().to_vector();
    /// assert_eq!(reversed, vec![6, 4, 2]);
    /// ```
    ///
    /// Only views whose every stage can walk backward can be reversed. This
    /// excludes integer sources and the `take()`, `zip()` and `cycle()`
    /// stages, among others.
    ///
    /// ```compile_fail
    /// # use rangelite::{ints, ViewExt};
    /// let reversed = ints(0, 3).reverse().to_vector();
    /// ```
    ///
    /// ```compile_fail
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 2, 3];
    /// let reversed = all(&input).take(2).reverse().to_vector();
    /// ```
    ///
    /// ```compile_fail
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 2, 3];
    /// let reversed = all(&input).cycle().reverse().take(4).to_vector();
    /// ```
    fn reverse(self) -> Reverse<Self>
    where
        Self: ReversibleView,
    {
        Reverse::new(self)
    }

    /// Repeats this view forever. This must be bounded downstream, for
    /// example with [`take()`](Self::take).
    ///
    /// # Panics
    ///
    /// Creating a cursor over the resulting view panics if this view is
    /// empty.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 2, 3];
    /// let cycled = all(&input).cycle().take(7).to_vector();
    /// assert_eq!(cycled, vec![&1, &2, &3, &1, &2, &3, &1]);
    /// ```
    fn cycle(self) -> Cycle<Self> {
        Cycle::new(self)
    }

    /// Caches the current element, so that reading it repeatedly doesn't
    /// re-evaluate upstream functions.
    fn cache1(self) -> Cache1<Self>
    where
        Self::Item: Clone,
    {
        Cache1::new(self)
    }

    /// Splits this view into maximal runs of consecutive elements related
    /// to the first element of their run by the given relation. Each run is
    /// yielded as a [`Group`], itself a lazy view.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![1, 1, 2, 2, 2, 3, 1, 1];
    /// let groups = all(&input)
    ///     .group_by(|a, b| a == b)
    ///     .map(|group| group.distance())
    ///     .to_vector();
    /// assert_eq!(groups, vec![2, 3, 1, 2]);
    /// ```
    fn group_by<F>(self, relation: F) -> GroupBy<Self, F>
    where
        F: Fn(&Self::Item, &Self::Item) -> bool + Clone,
        Self::Item: Clone,
    {
        GroupBy::new(self, relation)
    }

    /// Splits this view into maximal runs of consecutive elements that the
    /// given function maps to equal keys.
    fn group_on<F, K>(self, key: F) -> GroupBy<Self, SameKey<F>>
    where
        F: Fn(&Self::Item) -> K + Clone,
        K: PartialEq,
        Self::Item: Clone,
    {
        GroupBy::new(self, SameKey(key))
    }

    /// Dereferences each element.
    fn dereference(self) -> Map<Self, Dereferenced>
    where
        Self::Item: Dereference,
    {
        Map::new(self, Dereferenced)
    }

    /// Removes empty optionals and unwraps the remaining ones.
    ///
    /// ```rust
    /// # use rangelite::{all, ViewExt};
    /// let input = vec![Some(1), None, Some(3)];
    /// assert_eq!(all(&input).cat_maybes().to_vector(), vec![&1, &3]);
    /// ```
    fn cat_maybes(self) -> Map<KeepIf<Self, Not<IsNothing>>, Dereferenced>
    where
        Self::Item: Maybe,
    {
        KeepIf::new(self, Not(IsNothing)).dereference()
    }

    /// Projects the first component of each pair.
    fn keys(self) -> Map<Self, FirstOf>
    where
        Self::Item: Pair,
    {
        Map::new(self, FirstOf)
    }

    /// Collects the elements of this view into a [`Vec`].
    fn to_vector(&self) -> Vec<Self::Item> {
        sink::to_vector(self.cursor())
    }

    /// Collects the elements of this view into any collection.
    fn to<T: FromIterator<Self::Item>>(&self) -> T {
        self.iter().collect()
    }

    /// Collects the elements of this view into a [`String`].
    fn to_string(&self) -> String
    where
        String: FromIterator<Self::Item>,
    {
        self.to()
    }

    /// Counts the elements of this view, by walking it.
    fn distance(&self) -> usize {
        sink::distance(self.cursor())
    }

    /// Returns the element with the minimal key, or [`None`] if this view is
    /// empty. The earliest element wins ties.
    fn min_by<F, K>(&self, key: F) -> Option<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        sink::extremum_by_key(self.cursor(), key, sink::Extremum::Min)
    }

    /// Returns the element with the maximal key, or [`None`] if this view is
    /// empty. The earliest element wins ties.
    fn max_by<F, K>(&self, key: F) -> Option<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        sink::extremum_by_key(self.cursor(), key, sink::Extremum::Max)
    }

    /// Returns the minimal element, or [`None`] if this view is empty.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        sink::extremum(self.cursor(), sink::Extremum::Min)
    }

    /// Returns the maximal element, or [`None`] if this view is empty.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        sink::extremum(self.cursor(), sink::Extremum::Max)
    }

    /// Folds the elements of this view from the left, starting from `init`.
    fn accumulate<A, F>(&self, op: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.iter().fold(init, op)
    }

    /// Folds the elements of this view from the left, using the first element
    /// as the initial value. Returns [`None`] if this view is empty.
    fn accumulate_monoid<F>(&self, op: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.iter().reduce(op)
    }

    /// Returns the first element, or [`None`] if this view is empty.
    fn head(&self) -> Option<Self::Item> {
        self.iter().peek()
    }
}

impl<V: View> ViewExt for V {}

impl<'data, C: ?Sized + 'data> IntoView for &'data C
where
    AllView<'data, C>: View,
{
    type View = AllView<'data, C>;

    fn into_view(self) -> AllView<'data, C> {
        AllView::new(self)
    }
}
