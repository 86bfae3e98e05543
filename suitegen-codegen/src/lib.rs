//! Test method rendering for the suitegen conformance test generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`sort`] - Section partitioning and ordering of manifest entries
//! - [`targets`] - Test framework vocabularies (JUnit, Rust)
//! - [`lint`] - Manifest lints and diagnostics
//! - [`Generator`] - Renders a whole suite for a target

pub mod builder;
mod generator;
pub mod lint;
pub mod sort;
pub mod targets;

pub use generator::{GenerateOptions, Generator, banner};
