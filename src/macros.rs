// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Internal macros, to swap the logging macros implementation based on whether
//! the `log` feature is enabled or not, and to implement the boilerplate shared
//! by all views.

#[cfg(feature = "log")]
macro_rules! log_debug {
    ( $($args:tt)* ) => {
        log::debug!( $($args)* )
    }
}

#[cfg(feature = "log")]
macro_rules! log_error {
    ( $($args:tt)* ) => {
        log::error!( $($args)* )
    }
}

#[cfg(all(feature = "log", feature = "log_pipeline"))]
macro_rules! log_trace {
    ( $($args:tt)* ) => {
        log::trace!( $($args)* )
    }
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ( $($args:tt)* ) => {
        ()
    };
}

#[cfg(not(feature = "log"))]
macro_rules! log_error {
    ( $($args:tt)* ) => {
        ()
    };
}

#[cfg(not(feature = "log_pipeline"))]
macro_rules! log_trace {
    ( $($args:tt)* ) => {
        ()
    };
}

/// Implements [`IntoIterator`] for references to a view, and
/// [`IntoView`](crate::view::IntoView) for the view itself (a view passed to
/// [`all()`](crate::view::all) is forwarded unchanged).
macro_rules! impl_view_boilerplate {
    ( $( [ $($generics:tt)* ] $view:ty ),* $(,)? ) => {
        $(
            impl<'iter, $($generics)*> IntoIterator for &'iter $view
            where
                $view: $crate::view::View,
            {
                type Item = <$view as $crate::view::View>::Item;
                type IntoIter = $crate::view::Iter<<$view as $crate::view::View>::Cursor>;

                fn into_iter(self) -> Self::IntoIter {
                    $crate::view::ViewExt::iter(self)
                }
            }

            impl<$($generics)*> $crate::view::IntoView for $view
            where
                $view: $crate::view::View,
            {
                type View = Self;

                fn into_view(self) -> Self {
                    self
                }
            }
        )*
    };
}

/// Implements [`Attach`](crate::view::Attach) for stages whose source is their
/// `upstream` field of generic type `V`.
macro_rules! forward_attach {
    ( $( [ $($generics:tt)* ] $view:ty ),* $(,)? ) => {
        $(
            impl<'data, $($generics)*> $crate::view::Attach<'data> for $view
            where
                V: $crate::view::Attach<'data>,
            {
                type Input = V::Input;

                fn attach(&mut self, input: &'data V::Input) {
                    self.upstream.attach(input)
                }
            }
        )*
    };
}

pub(crate) use forward_attach;
pub(crate) use impl_view_boilerplate;
pub(crate) use log_debug;
pub(crate) use log_error;
pub(crate) use log_trace;
