// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Materialization of views into concrete values.

use super::Cursor;
use crate::macros::log_trace;

/// Capacity reserved by [`to_vector()`] before pushing the first element.
pub(super) const VECTOR_RESERVE_HINT: usize = 10;

/// Drains a cursor into a [`Vec`].
pub(super) fn to_vector<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
    let mut result = Vec::new();
    if !cursor.end() {
        result.reserve(VECTOR_RESERVE_HINT);
    }
    while !cursor.end() {
        result.push(cursor.get());
        cursor.next();
    }
    log_trace!("Materialized a view into {} elements", result.len());
    result
}

/// Counts the elements remaining in a cursor.
pub(super) fn distance<C: Cursor>(mut cursor: C) -> usize {
    let mut count = 0;
    while !cursor.end() {
        count += 1;
        cursor.next();
    }
    count
}

/// Which extremum to search for.
#[derive(Clone, Copy, Debug)]
pub(super) enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Returns whether `candidate` strictly improves over `best`.
    fn improves<K: PartialOrd>(self, candidate: &K, best: &K) -> bool {
        match self {
            Extremum::Min => candidate < best,
            Extremum::Max => candidate > best,
        }
    }
}

/// Returns the earliest element whose key is extremal.
pub(super) fn extremum_by_key<C, F, K>(mut cursor: C, key: F, which: Extremum) -> Option<C::Item>
where
    C: Cursor,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
{
    let mut best: Option<(K, C::Item)> = None;
    while !cursor.end() {
        let item = cursor.get();
        let candidate = key(&item);
        match &best {
            Some((best_key, _)) if !which.improves(&candidate, best_key) => (),
            _ => best = Some((candidate, item)),
        }
        cursor.next();
    }
    best.map(|(_, item)| item)
}

/// Returns the earliest extremal element.
pub(super) fn extremum<C>(mut cursor: C, which: Extremum) -> Option<C::Item>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    let mut best: Option<C::Item> = None;
    while !cursor.end() {
        let item = cursor.get();
        match &best {
            Some(best_item) if !which.improves(&item, best_item) => (),
            _ => best = Some(item),
        }
        cursor.next();
    }
    best
}
