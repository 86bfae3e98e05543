//! Lint for fixtures that derive the same identifier.

use std::collections::HashMap;

use suitegen_manifest::{Entry, Manifest};

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that reports every entry whose name needed a numeric suffix.
pub struct IdentifierCollisionLint;

impl Lint for IdentifierCollisionLint {
    fn name(&self) -> &'static str {
        "identifier-collision"
    }

    fn description(&self) -> &'static str {
        "Report fixtures whose test names needed a numeric suffix"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        if manifest.occurrences().collisions().next().is_none() {
            return;
        }

        let mut first: HashMap<&str, &Entry> = HashMap::new();
        for entry in manifest.entries() {
            match first.get(entry.identifier.as_str()) {
                Some(original) => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "'{}' derives identifier '{}' like '{}' (line {}), rendered as {}",
                            entry.filename,
                            entry.identifier,
                            original.filename,
                            original.line,
                            entry.method_name()
                        ),
                    )
                    .at_line(entry.line),
                ),
                None => {
                    first.insert(&entry.identifier, entry);
                }
            }
        }
    }
}
