// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementation details of the pipeline stages.

use super::func::{Predicate, Transform};
use super::{Create, Cursor, ReversibleView, View};
use crate::macros::{forward_attach, impl_view_boilerplate, log_trace};
use std::fmt::{self, Debug};

// Filtering stages.

/// A view keeping only the elements that satisfy a predicate. This struct is
/// created by the [`keep_if()`](super::ViewExt::keep_if),
/// [`filter()`](super::ViewExt::filter) and
/// [`remove_if()`](super::ViewExt::remove_if) methods on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct KeepIf<V, P> {
    upstream: V,
    pred: P,
}

impl<V, P> KeepIf<V, P> {
    pub(super) fn new(upstream: V, pred: P) -> Self {
        Self { upstream, pred }
    }
}

/// The cursor of a [`KeepIf`] view.
#[derive(Clone, Debug)]
pub struct KeepIfCursor<C, P> {
    inner: C,
    pred: P,
}

impl<C: Cursor, P: Predicate<C::Item>> KeepIfCursor<C, P> {
    fn init(inner: C, pred: P) -> Self {
        let mut cursor = Self { inner, pred };
        cursor.skip_rejected();
        cursor
    }

    fn skip_rejected(&mut self) {
        while !self.inner.end() && !self.pred.test(&self.inner.get()) {
            self.inner.next();
        }
    }
}

impl<C: Cursor, P: Predicate<C::Item>> Cursor for KeepIfCursor<C, P> {
    type Item = C::Item;
    type Pos = C::Pos;

    #[inline(always)]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    fn next(&mut self) {
        self.inner.next();
        self.skip_rejected();
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.inner.end()
    }

    #[inline(always)]
    fn pos(&self) -> C::Pos {
        self.inner.pos()
    }
}

impl<V: View, P: Predicate<V::Item>> View for KeepIf<V, P> {
    type Item = V::Item;
    type Cursor = KeepIfCursor<V::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        KeepIfCursor::init(self.upstream.cursor(), self.pred.clone())
    }
}

impl<V: ReversibleView, P: Predicate<V::Item>> ReversibleView for KeepIf<V, P> {
    type RevCursor = KeepIfCursor<V::RevCursor, P>;

    fn rev_cursor(&self) -> Self::RevCursor {
        KeepIfCursor::init(self.upstream.rev_cursor(), self.pred.clone())
    }
}

impl<'data, V: Create<'data>, P: Default> Create<'data> for KeepIf<V, P> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), P::default())
    }
}

// Mapping stages.

/// A view applying a function to each element. This struct is created by the
/// [`map()`](super::ViewExt::map) method on [`ViewExt`](super::ViewExt), and
/// underlies several combinators such as
/// [`enumerate()`](super::ViewExt::enumerate).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Map<V, F> {
    upstream: V,
    func: F,
}

impl<V, F> Map<V, F> {
    pub(super) fn new(upstream: V, func: F) -> Self {
        Self { upstream, func }
    }
}

/// The cursor of a [`Map`] view.
#[derive(Clone, Debug)]
pub struct MapCursor<C, F> {
    inner: C,
    func: F,
}

impl<C: Cursor, F: Transform<C::Item>> Cursor for MapCursor<C, F> {
    type Item = F::Output;
    type Pos = C::Pos;

    #[inline(always)]
    fn get(&self) -> F::Output {
        self.func.apply(self.inner.get())
    }

    #[inline(always)]
    fn next(&mut self) {
        self.inner.next()
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.inner.end()
    }

    #[inline(always)]
    fn pos(&self) -> C::Pos {
        self.inner.pos()
    }
}

impl<V: View, F: Transform<V::Item>> View for Map<V, F> {
    type Item = F::Output;
    type Cursor = MapCursor<V::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            inner: self.upstream.cursor(),
            func: self.func.clone(),
        }
    }
}

impl<V: ReversibleView, F: Transform<V::Item>> ReversibleView for Map<V, F> {
    type RevCursor = MapCursor<V::RevCursor, F>;

    fn rev_cursor(&self) -> Self::RevCursor {
        MapCursor {
            inner: self.upstream.rev_cursor(),
            func: self.func.clone(),
        }
    }
}

impl<'data, V: Create<'data>, F: Default> Create<'data> for Map<V, F> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), F::default())
    }
}

// Predicate-bounded stages.

/// A view yielding elements while they satisfy a predicate. This struct is
/// created by the [`take_while()`](super::ViewExt::take_while) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct TakeWhile<V, P> {
    upstream: V,
    pred: P,
}

impl<V, P> TakeWhile<V, P> {
    pub(super) fn new(upstream: V, pred: P) -> Self {
        Self { upstream, pred }
    }
}

/// The cursor of a [`TakeWhile`] view.
///
/// Its position is [`None`] once finished, even if the upstream cursor is not
/// exhausted.
#[derive(Clone, Debug)]
pub struct TakeWhileCursor<C, P> {
    inner: C,
    pred: P,
    finished: bool,
}

impl<C: Cursor, P: Predicate<C::Item>> TakeWhileCursor<C, P> {
    fn init(inner: C, pred: P) -> Self {
        let finished = inner.end() || !pred.test(&inner.get());
        Self {
            inner,
            pred,
            finished,
        }
    }
}

impl<C: Cursor, P: Predicate<C::Item>> Cursor for TakeWhileCursor<C, P> {
    type Item = C::Item;
    type Pos = Option<C::Pos>;

    #[inline(always)]
    fn get(&self) -> C::Item {
        assert!(!self.finished, "called get() on an exhausted cursor");
        self.inner.get()
    }

    fn next(&mut self) {
        assert!(!self.finished, "called next() on an exhausted cursor");
        self.inner.next();
        self.finished = self.inner.end() || !self.pred.test(&self.inner.get());
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.finished
    }

    fn pos(&self) -> Option<C::Pos> {
        if self.finished {
            None
        } else {
            Some(self.inner.pos())
        }
    }
}

impl<V: View, P: Predicate<V::Item>> View for TakeWhile<V, P> {
    type Item = V::Item;
    type Cursor = TakeWhileCursor<V::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor::init(self.upstream.cursor(), self.pred.clone())
    }
}

impl<'data, V: Create<'data>, P: Default> Create<'data> for TakeWhile<V, P> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), P::default())
    }
}

/// A view yielding elements while they satisfy a predicate, followed by the
/// first element that doesn't. This struct is created by the
/// [`take_while_incl()`](super::ViewExt::take_while_incl) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct TakeWhileIncl<V, P> {
    upstream: V,
    pred: P,
}

impl<V, P> TakeWhileIncl<V, P> {
    pub(super) fn new(upstream: V, pred: P) -> Self {
        Self { upstream, pred }
    }
}

/// State of a [`TakeWhileInclCursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TakeWhileInclState {
    /// The current element satisfies the predicate.
    Taking,
    /// The current element is the first one failing the predicate.
    Last,
    Finished,
}

/// The cursor of a [`TakeWhileIncl`] view.
#[derive(Clone, Debug)]
pub struct TakeWhileInclCursor<C, P> {
    inner: C,
    pred: P,
    state: TakeWhileInclState,
}

impl<C: Cursor, P: Predicate<C::Item>> TakeWhileInclCursor<C, P> {
    fn init(inner: C, pred: P) -> Self {
        let mut cursor = Self {
            inner,
            pred,
            state: TakeWhileInclState::Taking,
        };
        cursor.test_current();
        cursor
    }

    fn test_current(&mut self) {
        self.state = if self.inner.end() {
            TakeWhileInclState::Finished
        } else if self.pred.test(&self.inner.get()) {
            TakeWhileInclState::Taking
        } else {
            TakeWhileInclState::Last
        };
    }
}

impl<C: Cursor, P: Predicate<C::Item>> Cursor for TakeWhileInclCursor<C, P> {
    type Item = C::Item;
    type Pos = Option<C::Pos>;

    #[inline(always)]
    fn get(&self) -> C::Item {
        assert!(
            self.state != TakeWhileInclState::Finished,
            "called get() on an exhausted cursor"
        );
        self.inner.get()
    }

    fn next(&mut self) {
        match self.state {
            TakeWhileInclState::Taking => {
                self.inner.next();
                self.test_current();
            }
            TakeWhileInclState::Last => self.state = TakeWhileInclState::Finished,
            TakeWhileInclState::Finished => panic!("called next() on an exhausted cursor"),
        }
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.state == TakeWhileInclState::Finished
    }

    fn pos(&self) -> Option<C::Pos> {
        match self.state {
            TakeWhileInclState::Finished => None,
            TakeWhileInclState::Taking | TakeWhileInclState::Last => Some(self.inner.pos()),
        }
    }
}

impl<V: View, P: Predicate<V::Item>> View for TakeWhileIncl<V, P> {
    type Item = V::Item;
    type Cursor = TakeWhileInclCursor<V::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileInclCursor::init(self.upstream.cursor(), self.pred.clone())
    }
}

impl<'data, V: Create<'data>, P: Default> Create<'data> for TakeWhileIncl<V, P> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), P::default())
    }
}

/// A view skipping elements while they satisfy a predicate. This struct is
/// created by the [`drop_while()`](super::ViewExt::drop_while) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct DropWhile<V, P> {
    upstream: V,
    pred: P,
}

impl<V, P> DropWhile<V, P> {
    pub(super) fn new(upstream: V, pred: P) -> Self {
        Self { upstream, pred }
    }
}

impl<V: View, P: Predicate<V::Item>> View for DropWhile<V, P> {
    type Item = V::Item;
    type Cursor = V::Cursor;

    fn cursor(&self) -> V::Cursor {
        let mut cursor = self.upstream.cursor();
        while !cursor.end() && self.pred.test(&cursor.get()) {
            cursor.next();
        }
        cursor
    }
}

impl<'data, V: Create<'data>, P: Default> Create<'data> for DropWhile<V, P> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), P::default())
    }
}

// Counting stages.

/// A view yielding at most a given number of elements. This struct is created
/// by the [`take()`](super::ViewExt::take) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct TakeN<V> {
    upstream: V,
    n: usize,
}

impl<V> TakeN<V> {
    pub(super) fn new(upstream: V, n: usize) -> Self {
        Self { upstream, n }
    }
}

/// The cursor of a [`TakeN`] view.
///
/// The upstream cursor isn't advanced past the last taken element.
#[derive(Clone, Debug)]
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;
    type Pos = (C::Pos, usize);

    #[inline(always)]
    fn get(&self) -> C::Item {
        assert!(self.remaining > 0, "called get() on an exhausted cursor");
        self.inner.get()
    }

    fn next(&mut self) {
        assert!(self.remaining > 0, "called next() on an exhausted cursor");
        self.remaining -= 1;
        if self.remaining > 0 {
            self.inner.next();
        }
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.remaining == 0 || self.inner.end()
    }

    fn pos(&self) -> (C::Pos, usize) {
        (self.inner.pos(), self.remaining)
    }
}

impl<V: View> View for TakeN<V> {
    type Item = V::Item;
    type Cursor = TakeCursor<V::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            inner: self.upstream.cursor(),
            remaining: self.n,
        }
    }
}

/// A view skipping a given number of elements. This struct is created by the
/// [`drop()`](super::ViewExt::drop) and [`tail()`](super::ViewExt::tail)
/// methods on [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct DropN<V> {
    upstream: V,
    n: usize,
}

impl<V> DropN<V> {
    pub(super) fn new(upstream: V, n: usize) -> Self {
        Self { upstream, n }
    }
}

impl<V: View> View for DropN<V> {
    type Item = V::Item;
    type Cursor = V::Cursor;

    fn cursor(&self) -> V::Cursor {
        let mut cursor = self.upstream.cursor();
        for _ in 0..self.n {
            if cursor.end() {
                break;
            }
            cursor.next();
        }
        cursor
    }
}

// Combining stages.

/// A view pairing the elements of two views. This struct is created by the
/// [`zip()`](super::ViewExt::zip) method on [`ViewExt`](super::ViewExt) and
/// by the [`zip()`](super::zip) function.
///
/// Attaching an input only binds the source of the first view.
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Zip<V, W> {
    upstream: V,
    other: W,
}

impl<V, W> Zip<V, W> {
    pub(super) fn new(upstream: V, other: W) -> Self {
        Self { upstream, other }
    }
}

/// The cursor of a [`Zip`] view.
#[derive(Clone, Debug)]
pub struct ZipCursor<C, D> {
    left: C,
    right: D,
}

impl<C: Cursor, D: Cursor> Cursor for ZipCursor<C, D> {
    type Item = (C::Item, D::Item);
    type Pos = (C::Pos, D::Pos);

    #[inline(always)]
    fn get(&self) -> (C::Item, D::Item) {
        (self.left.get(), self.right.get())
    }

    #[inline(always)]
    fn next(&mut self) {
        self.left.next();
        self.right.next();
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.left.end() || self.right.end()
    }

    fn pos(&self) -> (C::Pos, D::Pos) {
        (self.left.pos(), self.right.pos())
    }
}

impl<V: View, W: View> View for Zip<V, W> {
    type Item = (V::Item, W::Item);
    type Cursor = ZipCursor<V::Cursor, W::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipCursor {
            left: self.upstream.cursor(),
            right: self.other.cursor(),
        }
    }
}

/// A view inserting a separator between consecutive elements. This struct is
/// created by the [`intersperse()`](super::ViewExt::intersperse) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
pub struct Intersperse<V: View> {
    upstream: V,
    separator: V::Item,
}

impl<V: View> Intersperse<V> {
    pub(super) fn new(upstream: V, separator: V::Item) -> Self {
        Self {
            upstream,
            separator,
        }
    }
}

impl<V> Clone for Intersperse<V>
where
    V: View + Clone,
    V::Item: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.upstream.clone(), self.separator.clone())
    }
}

impl<V> Debug for Intersperse<V>
where
    V: View + Debug,
    V::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersperse")
            .field("upstream", &self.upstream)
            .field("separator", &self.separator)
            .finish()
    }
}

/// The cursor of an [`Intersperse`] view.
pub struct IntersperseCursor<C: Cursor> {
    inner: C,
    separator: C::Item,
    give_separator: bool,
}

impl<C: Cursor> Clone for IntersperseCursor<C>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            separator: self.separator.clone(),
            give_separator: self.give_separator,
        }
    }
}

impl<C> Debug for IntersperseCursor<C>
where
    C: Cursor + Debug,
    C::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersperseCursor")
            .field("inner", &self.inner)
            .field("separator", &self.separator)
            .field("give_separator", &self.give_separator)
            .finish()
    }
}

impl<C: Cursor> Cursor for IntersperseCursor<C>
where
    C::Item: Clone,
{
    type Item = C::Item;
    type Pos = (C::Pos, bool);

    fn get(&self) -> C::Item {
        if self.give_separator {
            self.separator.clone()
        } else {
            self.inner.get()
        }
    }

    fn next(&mut self) {
        if self.give_separator {
            self.give_separator = false;
        } else {
            self.inner.next();
            self.give_separator = !self.inner.end();
        }
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.inner.end()
    }

    fn pos(&self) -> (C::Pos, bool) {
        (self.inner.pos(), self.give_separator)
    }
}

impl<V: View> View for Intersperse<V>
where
    V::Item: Clone,
{
    type Item = V::Item;
    type Cursor = IntersperseCursor<V::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        IntersperseCursor {
            inner: self.upstream.cursor(),
            separator: self.separator.clone(),
            give_separator: false,
        }
    }
}

impl<V: ReversibleView> ReversibleView for Intersperse<V>
where
    V::Item: Clone,
{
    type RevCursor = IntersperseCursor<V::RevCursor>;

    fn rev_cursor(&self) -> Self::RevCursor {
        IntersperseCursor {
            inner: self.upstream.rev_cursor(),
            separator: self.separator.clone(),
            give_separator: false,
        }
    }
}

// Traversal stages.

/// A view walking its upstream view backward. This struct is created by the
/// [`reverse()`](super::ViewExt::reverse) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Reverse<V> {
    upstream: V,
}

impl<V> Reverse<V> {
    pub(super) fn new(upstream: V) -> Self {
        Self { upstream }
    }
}

impl<V: ReversibleView> View for Reverse<V> {
    type Item = V::Item;
    type Cursor = V::RevCursor;

    fn cursor(&self) -> V::RevCursor {
        self.upstream.rev_cursor()
    }
}

impl<V: ReversibleView> ReversibleView for Reverse<V> {
    type RevCursor = V::Cursor;

    fn rev_cursor(&self) -> V::Cursor {
        self.upstream.cursor()
    }
}

impl<'data, V: Create<'data>> Create<'data> for Reverse<V> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input))
    }
}

/// A view repeating its upstream view forever. This struct is created by the
/// [`cycle()`](super::ViewExt::cycle) method on [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Cycle<V> {
    upstream: V,
}

impl<V> Cycle<V> {
    pub(super) fn new(upstream: V) -> Self {
        Self { upstream }
    }
}

/// The cursor of a [`Cycle`] view. It is never exhausted.
#[derive(Clone, Debug)]
pub struct CycleCursor<C> {
    start: C,
    inner: C,
    cycles: u64,
}

impl<C: Cursor> CycleCursor<C> {
    fn init(start: C) -> Self {
        assert!(!start.end(), "cannot cycle over an empty view");
        Self {
            inner: start.clone(),
            start,
            cycles: 0,
        }
    }
}

impl<C: Cursor> Cursor for CycleCursor<C> {
    type Item = C::Item;
    type Pos = (u64, C::Pos);

    #[inline(always)]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    fn next(&mut self) {
        self.inner.next();
        if self.inner.end() {
            self.inner = self.start.clone();
            self.cycles += 1;
            log_trace!("Cycle wrapped around (cycle #{})", self.cycles);
        }
    }

    #[inline(always)]
    fn end(&self) -> bool {
        false
    }

    fn pos(&self) -> (u64, C::Pos) {
        (self.cycles, self.inner.pos())
    }
}

impl<V: View> View for Cycle<V> {
    type Item = V::Item;
    type Cursor = CycleCursor<V::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        CycleCursor::init(self.upstream.cursor())
    }
}

impl<'data, V: Create<'data>> Create<'data> for Cycle<V> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input))
    }
}

/// A view caching the current element of its upstream view. This struct is
/// created by the [`cache1()`](super::ViewExt::cache1) method on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Cache1<V> {
    upstream: V,
}

impl<V> Cache1<V> {
    pub(super) fn new(upstream: V) -> Self {
        Self { upstream }
    }
}

/// The cursor of a [`Cache1`] view.
pub struct Cache1Cursor<C: Cursor> {
    inner: C,
    cache: Option<C::Item>,
}

impl<C: Cursor> Cache1Cursor<C> {
    fn init(inner: C) -> Self {
        let cache = if inner.end() { None } else { Some(inner.get()) };
        Self { inner, cache }
    }
}

impl<C: Cursor> Clone for Cache1Cursor<C>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<C> Debug for Cache1Cursor<C>
where
    C: Cursor + Debug,
    C::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache1Cursor")
            .field("inner", &self.inner)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<C: Cursor> Cursor for Cache1Cursor<C>
where
    C::Item: Clone,
{
    type Item = C::Item;
    type Pos = C::Pos;

    #[inline(always)]
    fn get(&self) -> C::Item {
        self.cache
            .clone()
            .expect("called get() on an exhausted cursor")
    }

    fn next(&mut self) {
        self.inner.next();
        self.cache = if self.inner.end() {
            None
        } else {
            Some(self.inner.get())
        };
    }

    #[inline(always)]
    fn end(&self) -> bool {
        self.inner.end()
    }

    #[inline(always)]
    fn pos(&self) -> C::Pos {
        self.inner.pos()
    }
}

impl<V: View> View for Cache1<V>
where
    V::Item: Clone,
{
    type Item = V::Item;
    type Cursor = Cache1Cursor<V::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        Cache1Cursor::init(self.upstream.cursor())
    }
}

impl<V: ReversibleView> ReversibleView for Cache1<V>
where
    V::Item: Clone,
{
    type RevCursor = Cache1Cursor<V::RevCursor>;

    fn rev_cursor(&self) -> Self::RevCursor {
        Cache1Cursor::init(self.upstream.rev_cursor())
    }
}

impl<'data, V: Create<'data>> Create<'data> for Cache1<V> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input))
    }
}

forward_attach!(
    [V, P] KeepIf<V, P>,
    [V, F] Map<V, F>,
    [V, P] TakeWhile<V, P>,
    [V, P] TakeWhileIncl<V, P>,
    [V, P] DropWhile<V, P>,
    [V] TakeN<V>,
    [V] DropN<V>,
    [V, W] Zip<V, W>,
    [V: super::View] Intersperse<V>,
    [V] Reverse<V>,
    [V] Cycle<V>,
    [V] Cache1<V>,
);

impl_view_boilerplate!(
    [V, P] KeepIf<V, P>,
    [V, F] Map<V, F>,
    [V, P] TakeWhile<V, P>,
    [V, P] TakeWhileIncl<V, P>,
    [V, P] DropWhile<V, P>,
    [V] TakeN<V>,
    [V] DropN<V>,
    [V, W] Zip<V, W>,
    [V: super::View] Intersperse<V>,
    [V] Reverse<V>,
    [V] Cycle<V>,
    [V] Cache1<V>,
);
