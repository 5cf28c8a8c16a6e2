//! Interop with the standard library's nullable representation.
//!
//! Null-style absence signaling is confined to this boundary: a
//! `std::option::Option` entering the crate is converted exactly once, here,
//! and the core types stay nullable-free. The reverse direction is
//! [`Maybe::into_option`](crate::Maybe::into_option).

use crate::core::Maybe;

/// Conversion from a nullable source into [`Maybe`].
///
/// `None` maps to `Nothing` and `Some(v)` maps to `Just(v)`. Composed with
/// [`Maybe::into_option`](crate::Maybe::into_option) this is the identity on
/// both variants.
///
/// # Example
///
/// ```rust
/// use perhaps::{IntoMaybe, Just, Nothing};
///
/// assert_eq!(Some(3).into_maybe(), Just(3));
/// assert_eq!(None::<i32>.into_maybe(), Nothing);
/// ```
pub trait IntoMaybe<T> {
    /// Convert this nullable value into a [`Maybe`].
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}
