//! The `Maybe` container and its combinator vocabulary.
//!
//! `Maybe<T>` represents "a value or its absence" as a closed two-variant
//! sum type. Every combinator is total: presence and absence are both
//! handled structurally, so no operation can dereference a missing value.

use crate::core::either::Either;
use crate::core::error::AbsentError;
use serde::{Deserialize, Serialize};

/// A value that may be absent.
///
/// A `Maybe<T>` is in exactly one of two states: `Just(value)` holding one
/// present value, or `Nothing` holding no value. Values are immutable once
/// constructed - combinators consume their input and produce a new `Maybe`
/// rather than mutating in place.
///
/// `Nothing` is declared first so the derived ordering sorts absence before
/// any present value.
///
/// # Example
///
/// ```rust
/// use perhaps::{Just, Maybe, Nothing};
///
/// let present: Maybe<i32> = Just(2);
/// let absent: Maybe<i32> = Nothing;
///
/// assert_eq!(present.map(|n| n * 10), Just(20));
/// assert_eq!(absent.map(|n| n * 10), Nothing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// The absence variant. Carries no payload.
    Nothing,
    /// The presence variant, holding exactly one value.
    Just(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> Maybe<T> {
    /// Check whether a value is present.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Check whether the value is absent.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Borrow the contents, producing a `Maybe` over a reference.
    ///
    /// Bridges from `&Maybe<T>` to `Maybe<&T>` so the consuming combinators
    /// can be used without giving up ownership.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Apply a transform to the contained value, if present.
    ///
    /// Absence passes through unchanged. `f` runs at most once and only
    /// when a value is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let name = Just("ferris");
    /// assert_eq!(name.map(|n| n.to_uppercase()), Just("FERRIS".to_string()));
    ///
    /// let missing: Maybe<&str> = Nothing;
    /// assert_eq!(missing.map(|n| n.to_uppercase()), Nothing);
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Combine two containers with a binary transform.
    ///
    /// `f` runs only when both operands are present; any absence on either
    /// side makes the result `Nothing`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let name = Just("ferris");
    /// let version = Just(7);
    /// assert_eq!(
    ///     name.map2(version, |n, v| format!("{n} v{v}")),
    ///     Just("ferris v7".to_string())
    /// );
    ///
    /// let missing: Maybe<i32> = Nothing;
    /// assert_eq!(Just("ferris").map2(missing, |n, v| format!("{n} v{v}")), Nothing);
    /// ```
    pub fn map2<S, U, F>(self, other: Maybe<S>, f: F) -> Maybe<U>
    where
        F: FnOnce(T, S) -> U,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(f(a, b)),
            _ => Maybe::Nothing,
        }
    }

    /// Apply a transform that itself returns a `Maybe`, flattening one level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Just(n / 2) } else { Nothing }
    /// }
    ///
    /// assert_eq!(Just(8).flat_map(half), Just(4));
    /// assert_eq!(Just(3).flat_map(half), Nothing);
    /// assert_eq!(Nothing.flat_map(half), Nothing);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Eliminate the container by handling both variants.
    ///
    /// This is the total elimination form: both branches produce a value of
    /// the same result type, so `fold` always returns and never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let word: Maybe<&str> = Just("ferris");
    /// assert_eq!(word.fold(|| 0, |w| w.len()), 6);
    ///
    /// let missing: Maybe<&str> = Nothing;
    /// assert_eq!(missing.fold(|| 0, |w| w.len()), 0);
    /// ```
    pub fn fold<U, E, P>(self, if_empty: E, if_present: P) -> U
    where
        E: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => if_present(value),
            Maybe::Nothing => if_empty(),
        }
    }

    /// Keep the value only if the predicate holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Nothing};
    ///
    /// assert_eq!(Just(4).filter(|n| n % 2 == 0), Just(4));
    /// assert_eq!(Just(3).filter(|n| n % 2 == 0), Nothing);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) => {
                if predicate(&value) {
                    Maybe::Just(value)
                } else {
                    Maybe::Nothing
                }
            }
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Keep the value only if the predicate does not hold.
    ///
    /// The negated form of [`filter`](Maybe::filter): for any total
    /// predicate, exactly one of the two keeps a present value.
    pub fn filter_not<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Test the contained value against a predicate.
    ///
    /// Returns `false` when the value is absent.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) => predicate(value),
            Maybe::Nothing => false,
        }
    }

    /// Run an action on the contained value, if present.
    ///
    /// This is the one sanctioned side-effecting eliminator: the action
    /// runs for its effect and nothing is returned. Absence is a no-op.
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Maybe::Just(value) = self {
            action(value);
        }
    }

    /// Unwrap the value or compute a fallback.
    ///
    /// The fallback generator is lazy: it is never invoked when a value is
    /// present. A generator that panics propagates that panic unmodified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let configured: Maybe<u16> = Just(8080);
    /// assert_eq!(configured.get_or_else(|| 80), 8080);
    ///
    /// let unset: Maybe<u16> = Nothing;
    /// assert_eq!(unset.get_or_else(|| 80), 80);
    /// ```
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default(),
        }
    }

    /// Return self if present, otherwise evaluate the alternative.
    ///
    /// The alternative is lazy: it is only evaluated on absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let primary: Maybe<&str> = Nothing;
    /// assert_eq!(primary.or_else(|| Just("fallback")), Just("fallback"));
    /// ```
    pub fn or_else<F>(self, alternative: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => alternative(),
        }
    }

    /// Unwrap the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. Prefer [`try_get`](Maybe::try_get),
    /// [`get_or_else`](Maybe::get_or_else), or [`fold`](Maybe::fold) in code
    /// that must not panic.
    pub fn get(self) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => panic!("called `Maybe::get()` on a `Nothing` value"),
        }
    }

    /// Unwrap the contained value, or report absence as an error.
    ///
    /// The non-panicking counterpart to [`get`](Maybe::get), for embedders
    /// that want to propagate absence with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{AbsentError, Just, Maybe, Nothing};
    ///
    /// let present: Maybe<i32> = Just(1);
    /// assert_eq!(present.try_get(), Ok(1));
    ///
    /// let absent: Maybe<i32> = Nothing;
    /// assert_eq!(absent.try_get(), Err(AbsentError));
    /// ```
    pub fn try_get(self) -> Result<T, AbsentError> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(AbsentError),
        }
    }

    /// Convert into the standard library's nullable representation.
    ///
    /// This is the single sanctioned escape hatch to code that speaks
    /// `std::option::Option`. Round-tripping through
    /// [`IntoMaybe`](crate::adapters::IntoMaybe) is the identity on both
    /// variants.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Convert into a vector of zero or one element.
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Maybe::Just(value) => vec![value],
            Maybe::Nothing => Vec::new(),
        }
    }

    /// Iterate over the contained value by reference (zero or one item).
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Convert presence into the right side of an [`Either`].
    ///
    /// A present value becomes `Right(value)`; absence becomes
    /// `Left(default())`. The default generator only runs on absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{Just, Maybe, Nothing};
    ///
    /// let found: Maybe<&str> = Just("ferris");
    /// assert!(found.to_right(|| "not found").is_right());
    ///
    /// let missing: Maybe<&str> = Nothing;
    /// assert!(!missing.to_right(|| "not found").is_right());
    /// ```
    pub fn to_right<L, F>(self, default: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Just(value) => Either::Right(value),
            Maybe::Nothing => Either::Left(default()),
        }
    }

    /// Convert presence into the left side of an [`Either`].
    ///
    /// The mirror image of [`to_right`](Maybe::to_right): a present value
    /// becomes `Left(value)`; absence becomes `Right(default())`.
    pub fn to_left<R, F>(self, default: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Maybe::Just(value) => Either::Left(value),
            Maybe::Nothing => Either::Right(default()),
        }
    }
}
