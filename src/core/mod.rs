//! Core optional-value types and logic.
//!
//! This module contains the pure functional core of the crate:
//! - `Maybe<T>`, the two-variant optional container and its combinators
//! - `Either<L, R>`, the disjoint union used as a conversion target
//! - `AbsentError`, the one error absence can surface as
//!
//! All logic in this module is pure (no side effects beyond caller-supplied
//! closures), and every value is immutable once constructed.

mod either;
mod error;
mod maybe;

pub use either::Either;
pub use error::AbsentError;
pub use maybe::Maybe;
