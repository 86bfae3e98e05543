//! Lint for fixtures listed more than once.

use std::collections::HashMap;

use suitegen_manifest::Manifest;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that warns when the same fixture file appears on several lines.
pub struct DuplicateFixtureLint;

impl Lint for DuplicateFixtureLint {
    fn name(&self) -> &'static str {
        "duplicate-fixture"
    }

    fn description(&self) -> &'static str {
        "Detect fixtures listed more than once"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for entry in manifest.entries() {
            if let Some(first) = seen.get(entry.filename.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "fixture '{}' is listed again (first on line {}), rendered as {}",
                            entry.filename,
                            first,
                            entry.method_name()
                        ),
                    )
                    .at_line(entry.line),
                );
            } else {
                seen.insert(&entry.filename, entry.line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_no_duplicates() {
        let manifest = Manifest::from_str("PASS: y_a.json\nPASS: n_a.json\n").unwrap();
        let mut diagnostics = Vec::new();
        DuplicateFixtureLint.check(&manifest, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_at_later_line() {
        let manifest =
            Manifest::from_str("PASS: y_a.json\n# gap\nFAIL: y_a.json\nPASS: y_a.json\n").unwrap();
        let mut diagnostics = Vec::new();
        DuplicateFixtureLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].location.as_deref(), Some("line 3"));
        assert_eq!(
            diagnostics[0].message,
            "fixture 'y_a.json' is listed again (first on line 1), rendered as yesA_2"
        );
        assert_eq!(diagnostics[1].location.as_deref(), Some("line 4"));
    }
}
