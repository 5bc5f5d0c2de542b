// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Capabilities of element types required by some combinators.

use std::rc::Rc;
use std::sync::Arc;

/// Element types that can be dereferenced by
/// [`dereference()`](super::ViewExt::dereference).
///
/// References to pointers are dereferenced into references to the pointee,
/// so that the result still borrows from the underlying container rather
/// than from a temporary.
pub trait Dereference {
    /// The dereferenced type.
    type Target;

    /// Dereferences this element.
    ///
    /// Dereferencing an empty optional is a programmer error, and panics.
    fn dereference(self) -> Self::Target;
}

impl<'a, 'b: 'a, T: ?Sized> Dereference for &'a &'b T {
    type Target = &'b T;

    fn dereference(self) -> &'b T {
        self
    }
}

impl<'a, T: ?Sized> Dereference for &'a Box<T> {
    type Target = &'a T;

    fn dereference(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Dereference for &'a Rc<T> {
    type Target = &'a T;

    fn dereference(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Dereference for &'a Arc<T> {
    type Target = &'a T;

    fn dereference(self) -> &'a T {
        self
    }
}

impl<T> Dereference for Box<T> {
    type Target = T;

    fn dereference(self) -> T {
        *self
    }
}

impl<T> Dereference for Option<T> {
    type Target = T;

    fn dereference(self) -> T {
        self.expect("called dereference() on an empty optional element")
    }
}

impl<'a, T> Dereference for &'a Option<T> {
    type Target = &'a T;

    fn dereference(self) -> &'a T {
        self.as_ref()
            .expect("called dereference() on an empty optional element")
    }
}

/// Optional-like element types, filtered by
/// [`cat_maybes()`](super::ViewExt::cat_maybes).
pub trait Maybe: Dereference {
    /// Returns whether this element holds no value.
    fn is_nothing(&self) -> bool;
}

impl<T> Maybe for Option<T> {
    fn is_nothing(&self) -> bool {
        self.is_none()
    }
}

impl<T> Maybe for &Option<T> {
    fn is_nothing(&self) -> bool {
        self.is_none()
    }
}

/// Pair-like element types, projected by [`keys()`](super::ViewExt::keys).
///
/// A reference to a pair projects to a reference to its first component.
pub trait Pair {
    /// Type of the first component.
    type First;

    /// Returns the first component of this pair.
    fn first(self) -> Self::First;
}

impl<A, B> Pair for (A, B) {
    type First = A;

    fn first(self) -> A {
        self.0
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;

    fn first(self) -> &'a A {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dereference_pointers() {
        let value = 42;
        let reference = &value;
        assert_eq!((&reference).dereference(), &42);
        assert_eq!((&Box::new(1)).dereference(), &1);
        assert_eq!((&Rc::new(2)).dereference(), &2);
        assert_eq!((&Arc::new(3)).dereference(), &3);
        assert_eq!(Box::new(4).dereference(), 4);
    }

    #[test]
    fn dereference_optionals() {
        assert_eq!(Some(5).dereference(), 5);
        assert_eq!((&Some(6)).dereference(), &6);
        assert!(None::<i32>.is_nothing());
        assert!(Maybe::is_nothing(&&None::<i32>));
        assert!(!Some(1).is_nothing());
    }

    #[test]
    #[should_panic(expected = "called dereference() on an empty optional element")]
    fn dereference_nothing() {
        None::<i32>.dereference();
    }

    #[test]
    fn pair_first() {
        assert_eq!((1, 'a').first(), 1);
        let pair = (String::from("key"), 2);
        let first: &String = (&pair).first();
        assert_eq!(first, "key");
    }
}
