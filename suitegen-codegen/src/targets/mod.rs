//! Test framework vocabularies.
//!
//! A [`TestTarget`] knows how one framework spells a test method: its doc
//! comment, annotations, error-capturing idiom and assertions. The
//! [`Generator`](crate::Generator) handles everything else.

mod junit;
mod rust;

pub use junit::JUnit;
pub use rust::RustTest;
use suitegen_manifest::Entry;

use crate::builder::{CodeFragment, Indent};

/// Explanation emitted in the body of disabled tests.
pub const DISABLED_COMMENT: &str =
    "// This test is currently DISABLED because the implementation is known not to pass it.";

/// Trait for test framework renderers.
///
/// Implement this trait to generate conformance tests for another framework.
pub trait TestTarget {
    /// Target identifier (e.g., "junit", "rust")
    fn name(&self) -> &'static str;

    /// Indentation of rendered code
    fn indent(&self) -> Indent {
        Indent::default()
    }

    /// Render one test method
    fn render_case(&self, case: &TestCase<'_>) -> Vec<CodeFragment>;
}

/// A manifest entry bound to the fixture path its test reads.
#[derive(Debug, Clone)]
pub struct TestCase<'a> {
    pub entry: &'a Entry,
    /// `<fixtures>/<filename>`, unescaped.
    pub fixture_path: String,
}

impl<'a> TestCase<'a> {
    /// Bind `entry` to a fixture directory. The directory is used verbatim.
    pub fn new(entry: &'a Entry, fixtures: &str) -> Self {
        Self {
            entry,
            fixture_path: format!("{}/{}", fixtures, entry.filename),
        }
    }

    /// Comments that open the body of a disabled test; empty when supported.
    pub fn disabled_comments(&self) -> Vec<CodeFragment> {
        if self.entry.supported {
            return Vec::new();
        }
        vec![
            CodeFragment::line(DISABLED_COMMENT),
            CodeFragment::line(format!(
                "// This is a \"{}\" test, so the file contains {}.",
                self.entry.polarity.prefix(),
                self.entry.polarity.describe()
            )),
        ]
    }
}
