//! Core validation types.
//!
//! This module contains the pure building blocks of the engine:
//! - Rule outcomes via the `Outcome` enum
//! - Named captured values via `Field`
//! - Rule predicates via `Rule`
//!
//! Nothing in this module performs side effects. Rules are pure functions
//! over a borrowed, possibly absent value.

mod field;
mod outcome;
mod rule;

pub use field::Field;
pub use outcome::Outcome;
pub use rule::Rule;
