//! A two-sided disjoint union.
//!
//! `Either<L, R>` carries exactly one of two values. Its primary role here
//! is as a conversion target from [`Maybe`](crate::Maybe): presence lands on
//! one side and a caller-supplied default fills the other, so absence can be
//! bridged into code that wants an explicit payload on both branches.

use crate::core::maybe::Maybe;
use serde::{Deserialize, Serialize};

/// One of two values: `Left(L)` or `Right(R)`.
///
/// # Example
///
/// ```rust
/// use perhaps::{Either, Just, Maybe, Nothing};
///
/// let found: Maybe<u16> = Just(8080);
/// let port: Either<&str, u16> = found.to_right(|| "port not configured");
/// assert_eq!(port, Either::Right(8080));
///
/// let missing: Maybe<u16> = Nothing;
/// let port: Either<&str, u16> = missing.to_right(|| "port not configured");
/// assert_eq!(port, Either::Left("port not configured"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// The left side.
    Left(L),
    /// The right side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Check whether this holds the left side.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Check whether this holds the right side.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrow the contents, producing an `Either` over references.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(right),
        }
    }

    /// Eliminate the union by handling both sides.
    ///
    /// Total: both branches produce a value of the same result type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use perhaps::Either;
    ///
    /// let value: Either<&str, i32> = Either::Right(3);
    /// assert_eq!(value.fold(|msg| msg.len() as i32, |n| n * 10), 30);
    /// ```
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(left) => on_left(left),
            Either::Right(right) => on_right(right),
        }
    }

    /// Exchange the two sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(left) => Either::Right(left),
            Either::Right(right) => Either::Left(right),
        }
    }

    /// Project the left side into a [`Maybe`], discarding any right value.
    pub fn left(self) -> Maybe<L> {
        match self {
            Either::Left(left) => Maybe::Just(left),
            Either::Right(_) => Maybe::Nothing,
        }
    }

    /// Project the right side into a [`Maybe`], discarding any left value.
    pub fn right(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::Nothing,
            Either::Right(right) => Maybe::Just(right),
        }
    }

    /// Apply a transform to the left side, passing the right side through.
    pub fn map_left<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Either::Left(left) => Either::Left(f(left)),
            Either::Right(right) => Either::Right(right),
        }
    }

    /// Apply a transform to the right side, passing the left side through.
    pub fn map_right<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(f(right)),
        }
    }
}
