//! Section partitioning and ordering of manifest entries.

use suitegen_manifest::{Entry, Manifest, SortOrder};

/// Sort entries so that supported entries come first.
///
/// The sort is stable. With [`SortOrder::Manifest`] nothing else is compared,
/// so manifest order survives inside each group. With
/// [`SortOrder::Identifier`] ties are broken by identifier, then occurrence.
pub fn sort_entries(entries: &mut [&Entry], order: SortOrder) {
    match order {
        SortOrder::Manifest => entries.sort_by_key(|entry| !entry.supported),
        SortOrder::Identifier => entries.sort_by(|a, b| {
            b.supported
                .cmp(&a.supported)
                .then_with(|| a.identifier.cmp(&b.identifier))
                .then_with(|| a.occurrence.cmp(&b.occurrence))
        }),
    }
}

/// Entries split into the rendered sections, each in output order.
#[derive(Debug, Clone, Default)]
pub struct Sections<'a> {
    pub supported: Vec<&'a Entry>,
    pub unsupported: Vec<&'a Entry>,
}

impl<'a> Sections<'a> {
    pub fn new(manifest: &'a Manifest, order: SortOrder) -> Self {
        let mut entries: Vec<&Entry> = manifest.entries().iter().collect();
        sort_entries(&mut entries, order);

        let (supported, unsupported) = entries.into_iter().partition(|entry| entry.supported);
        Self {
            supported,
            unsupported,
        }
    }

    /// All entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.supported
            .iter()
            .chain(self.unsupported.iter())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.supported.len() + self.unsupported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn names(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.method_name()).collect()
    }

    const MANIFEST: &str = "\
FAIL: n_zeta.json
PASS: y_beta.json
FAIL: y_alpha.json
PASS: y_alpha.json
PASS: n_beta.json
FAIL: n_alpha.json
";

    #[test]
    fn test_manifest_order_partitions_only() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let sections = Sections::new(&manifest, SortOrder::Manifest);

        assert_eq!(
            names(&sections.supported),
            vec!["yesBeta", "yesAlpha_2", "noBeta_2"]
        );
        assert_eq!(
            names(&sections.unsupported),
            vec!["noZeta", "yesAlpha", "noAlpha_3"]
        );
    }

    #[test]
    fn test_identifier_order_sorts_within_sections() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let sections = Sections::new(&manifest, SortOrder::Identifier);

        assert_eq!(
            names(&sections.supported),
            vec!["yesAlpha_2", "yesBeta", "noBeta_2"]
        );
        assert_eq!(
            names(&sections.unsupported),
            vec!["yesAlpha", "noAlpha_3", "noZeta"]
        );
    }

    #[test]
    fn test_supported_always_first() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        for order in [SortOrder::Manifest, SortOrder::Identifier] {
            let sections = Sections::new(&manifest, order);
            let flags: Vec<bool> = sections.iter().map(|e| e.supported).collect();
            assert_eq!(flags, vec![true, true, true, false, false, false]);
            assert_eq!(sections.len(), 6);
        }
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::default();
        let sections = Sections::new(&manifest, SortOrder::Manifest);
        assert!(sections.is_empty());
    }
}
