//! Manifest types and parsing.

mod entry;
mod file;
mod occurrences;
mod parse;

use std::str::FromStr;

pub use entry::{Entry, Polarity};
pub use file::ManifestFile;
pub use occurrences::Occurrences;

use crate::Error;

/// A parsed conformance manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<Entry>,
    occurrences: Occurrences,
}

impl Manifest {
    /// Entries in manifest order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Occurrence counts per identifier.
    pub fn occurrences(&self) -> &Occurrences {
        &self.occurrences
    }

    /// Entries the implementation currently passes, in manifest order.
    pub fn supported(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.supported)
    }

    /// Entries the implementation currently fails, in manifest order.
    pub fn unsupported(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.supported)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    /// Parse manifest text (uses "manifest" as the filename in reports)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_filename(s, "manifest")
    }
}
