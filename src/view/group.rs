// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Grouping of consecutive related elements.
//!
//! Each group yielded by a [`GroupBy`] view is itself a view, holding a
//! snapshot of the parent cursor at the start of the group. Groups are
//! therefore independent of their parent: they can be walked in any order, any
//! number of times, and outlive the parent cursor.

use super::func::Relation;
use super::{Create, Cursor, View};
use crate::macros::{forward_attach, impl_view_boilerplate, log_trace};
use std::fmt::{self, Debug};

/// A view splitting its upstream view into runs of related elements. This
/// struct is created by the [`group_by()`](super::ViewExt::group_by) and
/// [`group_on()`](super::ViewExt::group_on) methods on
/// [`ViewExt`](super::ViewExt).
#[must_use = "views are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct GroupBy<V, R> {
    upstream: V,
    relation: R,
}

impl<V, R> GroupBy<V, R> {
    pub(super) fn new(upstream: V, relation: R) -> Self {
        Self { upstream, relation }
    }
}

/// The cursor of a [`GroupBy`] view, positioned at the start of a group.
pub struct GroupByCursor<C: Cursor, R> {
    inner: C,
    relation: R,
    /// First element of the current group, if any.
    first: Option<C::Item>,
}

impl<C: Cursor, R> GroupByCursor<C, R> {
    fn init(inner: C, relation: R) -> Self {
        let first = if inner.end() { None } else { Some(inner.get()) };
        Self {
            inner,
            relation,
            first,
        }
    }
}

impl<C: Cursor, R: Clone> Clone for GroupByCursor<C, R>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            relation: self.relation.clone(),
            first: self.first.clone(),
        }
    }
}

impl<C, R> Debug for GroupByCursor<C, R>
where
    C: Cursor + Debug,
    C::Item: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupByCursor")
            .field("inner", &self.inner)
            .field("relation", &self.relation)
            .field("first", &self.first)
            .finish()
    }
}

impl<C, R> Cursor for GroupByCursor<C, R>
where
    C: Cursor,
    C::Item: Clone,
    R: Relation<C::Item>,
{
    type Item = Group<C, R>;
    type Pos = C::Pos;

    fn get(&self) -> Group<C, R> {
        let first = self
            .first
            .clone()
            .expect("called get() on an exhausted cursor");
        Group {
            start: self.inner.clone(),
            relation: self.relation.clone(),
            first,
        }
    }

    fn next(&mut self) {
        let first = self
            .first
            .take()
            .expect("called next() on an exhausted cursor");
        loop {
            self.inner.next();
            if self.inner.end() {
                break;
            }
            let candidate = self.inner.get();
            if !self.relation.related(&first, &candidate) {
                self.first = Some(candidate);
                break;
            }
        }
        log_trace!("Moved to the next group");
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

impl<V, R> View for GroupBy<V, R>
where
    V: View,
    V::Item: Clone,
    R: Relation<V::Item>,
{
    type Item = Group<V::Cursor, R>;
    type Cursor = GroupByCursor<V::Cursor, R>;

    fn cursor(&self) -> Self::Cursor {
        GroupByCursor::init(self.upstream.cursor(), self.relation.clone())
    }
}

impl<'data, V: Create<'data>, R: Default> Create<'data> for GroupBy<V, R> {
    fn create(input: &'data V::Input) -> Self {
        Self::new(V::create(input), R::default())
    }
}

/// One group of a [`GroupBy`] view, itself a non-empty view over the
/// consecutive elements related to the first one.
///
/// ```rust
/// # use rangelite::{all, ViewExt};
/// let words = vec!["apple", "avocado", "banana", "cherry", "cranberry"];
/// let groups = all(&words).group_on(|w| w.chars().next());
/// let mut groups = groups.iter();
/// let first = groups.next().unwrap();
/// assert_eq!(first.to_vector(), vec![&"apple", &"avocado"]);
/// assert_eq!(groups.map(|g| g.distance()).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub struct Group<C: Cursor, R> {
    start: C,
    relation: R,
    first: C::Item,
}

impl<C: Cursor, R: Clone> Clone for Group<C, R>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            relation: self.relation.clone(),
            first: self.first.clone(),
        }
    }
}

impl<C, R> Debug for Group<C, R>
where
    C: Cursor + Debug,
    C::Item: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("start", &self.start)
            .field("relation", &self.relation)
            .field("first", &self.first)
            .finish()
    }
}

/// The cursor of a [`Group`] view.
pub struct GroupCursor<C: Cursor, R> {
    inner: C,
    relation: R,
    first: C::Item,
    finished: bool,
}

impl<C: Cursor, R: Clone> Clone for GroupCursor<C, R>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            relation: self.relation.clone(),
            first: self.first.clone(),
            finished: self.finished,
        }
    }
}

impl<C, R> Debug for GroupCursor<C, R>
where
    C: Cursor + Debug,
    C::Item: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupCursor")
            .field("inner", &self.inner)
            .field("relation", &self.relation)
            .field("first", &self.first)
            .field("finished", &self.finished)
            .finish()
    }
}

impl<C, R> Cursor for GroupCursor<C, R>
where
    C: Cursor,
    C::Item: Clone,
    R: Relation<C::Item>,
{
    type Item = C::Item;
    type Pos = Option<C::Pos>;

    fn get(&self) -> C::Item {
        assert!(!self.finished, "called get() on an exhausted cursor");
        self.inner.get()
    }

    fn next(&mut self) {
        assert!(!self.finished, "called next() on an exhausted cursor");
        self.inner.next();
        self.finished =
            self.inner.end() || !self.relation.related(&self.first, &self.inner.get());
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

impl<C, R> View for Group<C, R>
where
    C: Cursor,
    C::Item: Clone,
    R: Relation<C::Item>,
{
    type Item = C::Item;
    type Cursor = GroupCursor<C, R>;

    fn cursor(&self) -> Self::Cursor {
        GroupCursor {
            inner: self.start.clone(),
            relation: self.relation.clone(),
            first: self.first.clone(),
            finished: false,
        }
    }
}

forward_attach!([V, R] GroupBy<V, R>);

impl_view_boilerplate!(
    [V, R] GroupBy<V, R>,
    [C: Cursor, R] Group<C, R>,
);

#[cfg(test)]
mod test {
    use super::super::{all, input, ints, Attach, ViewExt};
    use super::*;

    #[test]
    fn group_by_runs() {
        let input = vec![1, 1, 2, 2, 2, 3, 1, 1];
        let groups = all(&input).group_by(|a, b| a == b);
        assert_eq!(
            groups.clone().map(|group| group.distance()).to_vector(),
            vec![2, 3, 1, 2]
        );
        assert_eq!(
            groups
                .map(|group| group.to_vector())
                .to_vector()
                .concat(),
            all(&input).to_vector()
        );
    }

    #[test]
    fn debug_groups() {
        let same_block: fn(&i32, &i32) -> bool = |a, b| a / 2 == b / 2;
        let groups = ints(0, 4).group_by(same_block);
        let mut cursor = groups.cursor();
        let text = format!("{cursor:?}");
        assert!(text.starts_with("GroupByCursor {"));
        assert!(text.contains("first: Some(0)"));

        cursor.next();
        let group = cursor.get();
        let text = format!("{group:?}");
        assert!(text.starts_with("Group {"));
        assert!(text.contains("first: 2"));

        let mut inner = group.cursor();
        inner.next();
        inner.next();
        let text = format!("{inner:?}");
        assert!(text.starts_with("GroupCursor {"));
        assert!(text.contains("finished: true"));
    }

    #[test]
    fn group_by_relation_to_first() {
        // Each element is compared to the first element of its group, not to
        // its predecessor.
        let input = vec![1, 2, 3, 4, 5, 6];
        let groups = all(&input)
            .group_by(|first, x| **x - **first < 2)
            .map(|group| group.to_vector())
            .to_vector();
        assert_eq!(groups, vec![vec![&1, &2], vec![&3, &4], vec![&5, &6]]);
    }

    #[test]
    fn group_by_empty_and_single() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(all(&empty).group_by(|a, b| a == b).distance(), 0);

        let single = vec![42];
        let groups = all(&single).group_by(|a, b| a == b);
        assert_eq!(groups.distance(), 1);
        assert_eq!(groups.head().map(|g| g.to_vector()), Some(vec![&42]));
    }

    #[test]
    fn group_on_key() {
        let input = vec![(1, 'a'), (1, 'b'), (2, 'c'), (3, 'd'), (3, 'e')];
        let groups = all(&input)
            .group_on(|pair| pair.0)
            .map(|group| group.map(|pair| pair.1).to_string())
            .to_vector();
        assert_eq!(groups, vec!["ab", "c", "de"]);
    }

    #[test]
    fn groups_outlive_parent_cursor() {
        let input = vec![1, 1, 2];
        let groups = all(&input).group_by(|a, b| a == b);
        let mut cursor = groups.cursor();
        let first = cursor.get();
        cursor.next();
        let second = cursor.get();
        cursor.next();
        assert!(cursor.end());
        // Walk the groups after the parent, and twice.
        assert_eq!(second.to_vector(), vec![&2]);
        assert_eq!(first.to_vector(), vec![&1, &1]);
        assert_eq!(first.to_vector(), vec![&1, &1]);
    }

    #[test]
    fn group_by_over_cycle() {
        let input = vec![1, 1, 2];
        let sizes = all(&input)
            .cycle()
            .group_by(|a, b| a == b)
            .take(5)
            .map(|group| group.take(10).distance())
            .to_vector();
        assert_eq!(sizes, vec![2, 1, 2, 1, 2]);
    }

    #[test]
    fn group_then_filter_and_enumerate() {
        let input = vec![5, 5, 6, 7, 7, 7];
        let long_runs = all(&input)
            .group_by(|a, b| a == b)
            .keep_if(|group| group.distance() > 1)
            .map(|group| (*group.head().unwrap(), group.distance()))
            .enumerate()
            .to_vector();
        assert_eq!(long_runs, vec![(0, (5, 2)), (1, (7, 3))]);
    }

    #[test]
    fn group_ints_by_block() {
        let sizes = ints(0, 10)
            .group_by(|a, b| a / 4 == b / 4)
            .map(|group| group.distance())
            .to_vector();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn attach_group_by() {
        let mut view = input::<Vec<char>>().group_by(|a, b| a == b);
        let data = vec!['a', 'a', 'b'];
        view.attach(&data);
        assert_eq!(view.distance(), 2);
    }

    #[test]
    #[should_panic(expected = "called next() on an exhausted cursor")]
    fn group_next_past_end() {
        let input = vec![1, 2];
        let groups = all(&input).group_by(|a, b| a == b);
        let group = groups.head().unwrap();
        let mut cursor = group.cursor();
        cursor.next();
        cursor.next();
    }
}
