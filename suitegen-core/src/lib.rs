//! Core utilities and types for the suitegen test generator.
//!
//! This crate provides the naming and file primitives shared by the
//! manifest parser, the renderers and the CLI.

mod file;
mod utils;

// File operations
pub use file::{OutputFile, WriteResult};
// String utilities
pub use utils::{escape_string_literal, to_pascal_case, to_snake_case};
