//! Core operations.
//!
//! Business logic for suitegen commands, separated from CLI argument parsing
//! and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{Generation, generate};
