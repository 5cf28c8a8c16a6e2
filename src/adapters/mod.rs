//! Boundary adapters.
//!
//! Everything that bridges outside representations into the core types lives
//! here: nullable values, fallible computations, and keyed maps with
//! nullable entries. Keeping these conversions at the edge keeps the core
//! free of null signaling and error absorption.

mod fallible;
mod lookup;
mod nullable;

pub use fallible::attempt;
pub use lookup::MaybeLookup;
pub use nullable::IntoMaybe;
