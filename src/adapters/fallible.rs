//! Converting fallible computations into absence.

use crate::core::Maybe;

/// Run a fallible computation, converting failure into `Nothing`.
///
/// A successful result becomes `Just(value)`; any error becomes `Nothing`,
/// discarding the error's detail. This is the only place the crate absorbs
/// external partiality - a `Maybe` carries no error payload, so callers who
/// need the failure itself should stay with `Result`.
///
/// # Example
///
/// ```rust
/// use perhaps::{attempt, Just, Nothing};
///
/// assert_eq!(attempt(|| "1".parse::<i32>()), Just(1));
/// assert_eq!(attempt(|| "foo".parse::<i32>()), Nothing);
/// ```
pub fn attempt<T, E, F>(computation: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, E>,
{
    match computation() {
        Ok(value) => Maybe::Just(value),
        Err(_) => Maybe::Nothing,
    }
}

impl<T, E> From<Result<T, E>> for Maybe<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Maybe::Just(value),
            Err(_) => Maybe::Nothing,
        }
    }
}
