//! Perhaps: a pure functional optional-value algebra
//!
//! Perhaps provides a two-variant optional container, [`Maybe`], with a
//! closed set of total combinators, alongside [`Either`] as a conversion
//! target and boundary adapters for nullable values, fallible computations,
//! keyed maps, and sequences. The core never dereferences a missing value:
//! presence and absence are both handled structurally, and the only escape
//! hatch back to nullable code is [`Maybe::into_option`].
//!
//! # Core Concepts
//!
//! - **Maybe**: `Just(value)` or `Nothing`, immutable once constructed
//! - **Combinators**: total transformations and eliminations (`map`,
//!   `flat_map`, `fold`, `filter`, `get_or_else`, ...)
//! - **Adapters**: nullable, fallible, keyed-lookup, and sequence interop,
//!   confined to the crate edge
//!
//! # Example
//!
//! ```rust
//! use perhaps::{attempt, Just, Maybe, Nothing, Sequential};
//!
//! // Convert fallible parses into presence/absence, then require all of them.
//! let parsed: Maybe<Vec<i32>> = ["1", "2", "3"]
//!     .iter()
//!     .map(|raw| attempt(|| raw.parse::<i32>()))
//!     .sequential();
//! assert_eq!(parsed, Just(vec![1, 2, 3]));
//!
//! // One bad element collapses the whole sequence.
//! let broken: Maybe<Vec<i32>> = ["1", "foo", "3"]
//!     .iter()
//!     .map(|raw| attempt(|| raw.parse::<i32>()))
//!     .sequential();
//! assert_eq!(broken, Nothing);
//! ```

pub mod adapters;
pub mod core;
pub mod iter;

// Re-export commonly used types
pub use crate::adapters::{attempt, IntoMaybe, MaybeLookup};
pub use crate::core::{AbsentError, Either, Maybe};
pub use crate::iter::{FirstMaybe, Sequential};

// Variant re-exports so call sites can write `Just(v)` / `Nothing` directly
pub use crate::core::Either::{Left, Right};
pub use crate::core::Maybe::{Just, Nothing};
