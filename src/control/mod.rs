//! Fuzzy-logic heating control core.
//!
//! Pure, synchronous, and hardware-agnostic: everything here takes
//! crisp numbers and caller-supplied timestamps.

pub mod defuzz;
pub mod derivative;
pub mod fuzzy;
pub mod membership;
pub mod rules;

pub use fuzzy::{Evaluation, FuzzyController};
