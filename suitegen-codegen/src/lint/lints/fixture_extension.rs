//! Lint for fixtures without a `.json` extension.

use suitegen_manifest::Manifest;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that warns about fixture names outside the `<y|n>_<name>.json` shape.
pub struct FixtureExtensionLint;

impl Lint for FixtureExtensionLint {
    fn name(&self) -> &'static str {
        "fixture-extension"
    }

    fn description(&self) -> &'static str {
        "Warn about fixture filenames that do not end in .json"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for entry in manifest.entries() {
            if !entry.filename.ends_with(".json") {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "fixture '{}' does not end in .json; test subject taken as '{}'",
                            entry.filename, entry.base_name
                        ),
                    )
                    .at_line(entry.line),
                );
            }
        }
    }
}
