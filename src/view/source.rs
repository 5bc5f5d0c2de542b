// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Source views at the start of a pipeline, and the free functions creating
//! them.

use super::func::Flatten3;
use super::{Attach, Create, Cursor, IntoView, Map, ReversibleView, View, ViewExt, Zip};
use crate::macros::{impl_view_boilerplate, log_debug, log_error};
use std::fmt::{self, Debug};
use std::iter::Rev;
use std::ops::Range;

/// A cursor walking a native iterator, one element ahead.
///
/// The position of this cursor is the number of elements it skipped so far.
pub struct IdentityCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    index: usize,
}

impl<I: Iterator> IdentityCursor<I> {
    pub(super) fn init(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter,
            current,
            index: 0,
        }
    }
}

impl<I> Debug for IdentityCursor<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityCursor")
            .field("iter", &self.iter)
            .field("current", &self.current)
            .field("index", &self.index)
            .finish()
    }
}

impl<I> Clone for IdentityCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            index: self.index,
        }
    }
}

impl<I> Cursor for IdentityCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    type Pos = usize;

    #[inline(always)]
    fn get(&self) -> I::Item {
        self.current
            .clone()
            .expect("called get() on an exhausted cursor")
    }

    #[inline(always)]
    fn next(&mut self) {
        assert!(
            self.current.is_some(),
            "called next() on an exhausted cursor"
        );
        self.current = self.iter.next();
        self.index += 1;
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.current.is_none()
    }

    #[inline(always)]
    fn pos(&self) -> usize {
        self.index
    }
}

/// A view over a borrowed container, which may be attached later. This
/// struct is created by the [`all()`] and [`input()`] functions.
///
/// The container must be iterable by reference. Reverse traversal is
/// available when the container's iterator is double-ended.
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct AllView<'data, C: ?Sized> {
    input: Option<&'data C>,
}

impl<'data, C: ?Sized> AllView<'data, C> {
    pub(super) fn new(input: &'data C) -> Self {
        Self { input: Some(input) }
    }

    fn input(&self) -> &'data C {
        match self.input {
            Some(input) => input,
            None => {
                log_error!("cannot traverse a pipeline that is not attached to any input");
                panic!("cannot traverse a pipeline that is not attached to any input");
            }
        }
    }
}

impl<C: ?Sized> Clone for AllView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for AllView<'_, C> {}

impl<'data, C: ?Sized> View for AllView<'data, C>
where
    &'data C: IntoIterator,
    <&'data C as IntoIterator>::IntoIter: Clone,
    <&'data C as IntoIterator>::Item: Clone,
{
    type Item = <&'data C as IntoIterator>::Item;
    type Cursor = IdentityCursor<<&'data C as IntoIterator>::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IdentityCursor::init(self.input().into_iter())
    }
}

impl<'data, C: ?Sized> ReversibleView for AllView<'data, C>
where
    &'data C: IntoIterator,
    <&'data C as IntoIterator>::IntoIter: Clone + DoubleEndedIterator,
    <&'data C as IntoIterator>::Item: Clone,
{
    type RevCursor = IdentityCursor<Rev<<&'data C as IntoIterator>::IntoIter>>;

    fn rev_cursor(&self) -> Self::RevCursor {
        IdentityCursor::init(self.input().into_iter().rev())
    }
}

impl<'data, C: ?Sized + 'data> Attach<'data> for AllView<'data, C> {
    type Input = C;

    fn attach(&mut self, input: &'data C) {
        log_debug!(
            "Attaching a pipeline to an input of type {}",
            std::any::type_name::<C>()
        );
        self.input = Some(input);
    }
}

impl<'data, C: ?Sized + 'data> Create<'data> for AllView<'data, C> {
    fn create(input: &'data C) -> Self {
        Self::new(input)
    }
}

/// A view over a borrowed container, walked from last to first. This struct
/// is created by the [`rall()`] function.
///
/// This view cannot itself be reversed.
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct ReverseAllView<'data, C: ?Sized> {
    input: AllView<'data, C>,
}

impl<C: ?Sized> Clone for ReverseAllView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for ReverseAllView<'_, C> {}

impl<'data, C: ?Sized> View for ReverseAllView<'data, C>
where
    AllView<'data, C>: ReversibleView,
{
    type Item = <AllView<'data, C> as View>::Item;
    type Cursor = <AllView<'data, C> as ReversibleView>::RevCursor;

    fn cursor(&self) -> Self::Cursor {
        self.input.rev_cursor()
    }
}

impl<'data, C: ?Sized + 'data> Attach<'data> for ReverseAllView<'data, C> {
    type Input = C;

    fn attach(&mut self, input: &'data C) {
        self.input.attach(input)
    }
}

impl<'data, C: ?Sized + 'data> Create<'data> for ReverseAllView<'data, C> {
    fn create(input: &'data C) -> Self {
        Self {
            input: AllView::new(input),
        }
    }
}

/// A view over consecutive integers. This struct is created by the [`ints()`]
/// and [`ints_from()`] functions.
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntsView {
    start: i32,
    end: i32,
}

impl View for IntsView {
    type Item = i32;
    type Cursor = IdentityCursor<Range<i32>>;

    fn cursor(&self) -> Self::Cursor {
        IdentityCursor::init(self.start..self.end)
    }
}

/// A view calling a function a fixed number of times. This struct is created
/// by the [`generate_n()`] function.
///
/// Each traversal starts from a fresh clone of the function, so stateful
/// closures restart from their initial state.
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct GenerateView<F> {
    func: F,
    count: usize,
}

/// The cursor of a [`GenerateView`].
#[derive(Debug)]
pub struct GenerateCursor<F, T> {
    func: F,
    remaining: usize,
    current: Option<T>,
}

impl<F: Clone, T: Clone> Clone for GenerateCursor<F, T> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            remaining: self.remaining,
            current: self.current.clone(),
        }
    }
}

impl<F, T> GenerateCursor<F, T>
where
    F: FnMut() -> T,
{
    fn init(mut func: F, count: usize) -> Self {
        let current = if count == 0 { None } else { Some(func()) };
        Self {
            func,
            remaining: count,
            current,
        }
    }
}

impl<F, T> Cursor for GenerateCursor<F, T>
where
    F: FnMut() -> T + Clone,
    T: Clone,
{
    type Item = T;
    type Pos = usize;

    fn get(&self) -> T {
        self.current
            .clone()
            .expect("called get() on an exhausted cursor")
    }

    fn next(&mut self) {
        assert!(self.remaining > 0, "called next() on an exhausted cursor");
        self.remaining -= 1;
        self.current = if self.remaining == 0 {
            None
        } else {
            Some((self.func)())
        };
    }

    fn end(&self) -> bool {
        self.remaining == 0
    }

    fn pos(&self) -> usize {
        self.remaining
    }
}

impl<F, T> View for GenerateView<F>
where
    F: FnMut() -> T + Clone,
    T: Clone,
{
    type Item = T;
    type Cursor = GenerateCursor<F, T>;

    fn cursor(&self) -> Self::Cursor {
        GenerateCursor::init(self.func.clone(), self.count)
    }
}

impl_view_boilerplate!(
    ['data, C: ?Sized] AllView<'data, C>,
    ['data, C: ?Sized] ReverseAllView<'data, C>,
    [] IntsView,
    [F] GenerateView<F>,
);

/// Starts a pipeline over the given input.
///
/// A reference to a container is wrapped into an [`AllView`]. A pipeline is
/// returned unchanged.
///
/// ```rust
/// # use rangelite::{all, ViewExt};
/// let input = vec![1, 2, 3];
/// let view = all(all(&input).map(|x| x + 1));
/// assert_eq!(view.to_vector(), vec![2, 3, 4]);
/// ```
pub fn all<I: IntoView>(input: I) -> I::View {
    input.into_view()
}

/// Starts a pipeline over the given container, walked from last to first.
///
/// ```rust
/// # use rangelite::{rall, ViewExt};
/// let input = vec![1, 2, 3];
/// assert_eq!(rall(&input).to_vector(), vec![&3, &2, &1]);
/// ```
pub fn rall<C: ?Sized>(input: &C) -> ReverseAllView<'_, C> {
    ReverseAllView {
        input: AllView::new(input),
    }
}

/// Starts a pipeline over a container of the given type, to be supplied later
/// with [`attach()`](Attach::attach).
///
/// # Panics
///
/// Traversing the pipeline before it is attached panics.
pub fn input<'data, C: ?Sized>() -> AllView<'data, C> {
    AllView { input: None }
}

/// Creates a view over the integers from `start` (inclusive) to `end`
/// (exclusive).
///
/// # Panics
///
/// Panics if `start` is greater than `end`.
pub fn ints(start: i32, end: i32) -> IntsView {
    assert!(
        start <= end,
        "cannot create a range of integers that ends before its start"
    );
    IntsView { start, end }
}

/// Creates a view over the integers from `start`, up to [`i32::MAX`]
/// (exclusive).
pub fn ints_from(start: i32) -> IntsView {
    ints(start, i32::MAX)
}

/// Creates a view yielding the results of `count` calls to the given function.
///
/// ```rust
/// # use rangelite::{generate_n, ViewExt};
/// let mut next = 1;
/// let powers = generate_n(
///     move || {
///         let value = next;
///         next *= 2;
///         value
///     },
///     5,
/// );
/// assert_eq!(powers.to_vector(), vec![1, 2, 4, 8, 16]);
/// assert_eq!(powers.to_vector(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn generate_n<F, T>(func: F, count: usize) -> GenerateView<F>
where
    F: FnMut() -> T + Clone,
    T: Clone,
{
    GenerateView { func, count }
}

/// Pairs the elements of two inputs, stopping as soon as either is exhausted.
pub fn zip<L: IntoView, R: IntoView>(left: L, right: R) -> Zip<L::View, R::View> {
    all(left).zip(right)
}

/// Groups the elements of three inputs into triples, stopping as soon as any
/// is exhausted.
#[allow(clippy::type_complexity)]
pub fn zip3<A: IntoView, B: IntoView, C: IntoView>(
    first: A,
    second: B,
    third: C,
) -> Map<Zip<Zip<A::View, B::View>, C::View>, Flatten3> {
    all(first).zip3(second, third)
}
