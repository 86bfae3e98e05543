//! Manifest parsing and configuration for the suitegen test generator.
//!
//! A manifest lists conformance fixtures one per line, e.g.
//!
//! ```text
//! # DO NOT EDIT! This file is automatically generated.
//! PASS: y_array_empty.json
//! FAIL (expected failure, but succeeded): n_object_trailing_comma.json
//! ```
//!
//! Parsing turns every data line into an [`Entry`] carrying the derived
//! test identifier and its occurrence number.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod manifest;

pub use config::{Config, JUnitConfig, RustConfig, SortOrder, Target};
pub use error::{Error, Result, SourceContext};
pub use manifest::{Entry, Manifest, ManifestFile, Occurrences, Polarity};
