//! Sequence adapters.
//!
//! This module integrates [`Maybe`] with iteration in both directions:
//! a `Maybe` iterates as a zero-or-one-element sequence, and sequences can
//! be collapsed back into a `Maybe` - either by requiring every element to
//! be present ([`Sequential`]) or by taking the first (matching) element
//! ([`FirstMaybe`]). Both collapses are deterministic and short-circuit
//! left to right.

use crate::adapters::IntoMaybe;
use crate::core::Maybe;

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collecting `Maybe` elements requires every one of them to be present.
///
/// Stops consuming the source at the first `Nothing`, discarding anything
/// accumulated so far.
///
/// # Example
///
/// ```rust
/// use perhaps::{Just, Maybe, Nothing};
///
/// let all_present = vec![Just(1), Just(2), Just(3)];
/// let collected: Maybe<Vec<i32>> = all_present.into_iter().collect();
/// assert_eq!(collected, Just(vec![1, 2, 3]));
///
/// let with_gap = vec![Just(1), Nothing, Just(3)];
/// let collected: Maybe<Vec<i32>> = with_gap.into_iter().collect();
/// assert_eq!(collected, Nothing);
/// ```
impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<C>>()
            .into_maybe()
    }
}

/// Collapse a sequence of `Maybe` values into a `Maybe` of the values.
///
/// Succeeds with all unwrapped values, in original order, iff every element
/// is present. Short-circuits to `Nothing` at the first absent element,
/// left to right.
pub trait Sequential<T> {
    /// Unwrap every element, or yield `Nothing` if any is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{attempt, Just, Maybe, Nothing, Sequential};
    ///
    /// fn parse_all(raw: &[&str]) -> Maybe<Vec<i32>> {
    ///     raw.iter().map(|s| attempt(|| s.parse::<i32>())).sequential()
    /// }
    ///
    /// assert_eq!(parse_all(&["1", "2", "3"]), Just(vec![1, 2, 3]));
    /// assert_eq!(parse_all(&["1", "foo", "3"]), Nothing);
    /// ```
    fn sequential(self) -> Maybe<Vec<T>>;
}

impl<T, I> Sequential<T> for I
where
    I: IntoIterator<Item = Maybe<T>>,
{
    fn sequential(self) -> Maybe<Vec<T>> {
        self.into_iter().collect()
    }
}

/// First-match collapse over any sequence.
///
/// Both methods stop consuming the source as soon as the result is
/// determined: nothing past the first match is evaluated.
pub trait FirstMaybe: IntoIterator + Sized {
    /// The first element, or `Nothing` for an empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{FirstMaybe, Just, Nothing};
    ///
    /// let numbers = vec![1, 2, 3, 4, 5, 6];
    /// assert_eq!(numbers.first_maybe(), Just(1));
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(empty.first_maybe(), Nothing);
    /// ```
    fn first_maybe(self) -> Maybe<Self::Item> {
        self.into_iter().next().into_maybe()
    }

    /// The first element satisfying the predicate, or `Nothing`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::{FirstMaybe, Just};
    ///
    /// let numbers = vec![1, 2, 3, 4, 5, 6];
    /// assert_eq!(numbers.find_maybe(|n| *n > 2), Just(3));
    /// ```
    fn find_maybe<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().find(predicate).into_maybe()
    }
}

impl<I: IntoIterator> FirstMaybe for I {}
