//! Per-identifier occurrence counting.

use indexmap::IndexMap;

/// Running count of entries per derived identifier.
///
/// Counts are assigned in the order entries are recorded, which is manifest
/// order. Keys keep their first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences {
    counts: IndexMap<String, usize>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more entry for `identifier` and return its occurrence number.
    pub fn record(&mut self, identifier: &str) -> usize {
        let count = self.counts.entry(identifier.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of entries recorded for `identifier`.
    pub fn count(&self, identifier: &str) -> usize {
        self.counts.get(identifier).copied().unwrap_or(0)
    }

    /// Identifiers recorded more than once, in first-seen order.
    pub fn collisions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(identifier, count)| (identifier.as_str(), *count))
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
