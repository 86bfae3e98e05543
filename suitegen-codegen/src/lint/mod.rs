//! Manifest lints.
//!
//! Lints never stop generation; they report manifest lines whose generated
//! tests are likely to surprise a reader.

mod diagnostic;
mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{DuplicateFixtureLint, FixtureExtensionLint, IdentifierCollisionLint};
use suitegen_manifest::Manifest;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// All built-in lints, in reporting order.
pub fn builtin_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(FixtureExtensionLint),
        Box::new(DuplicateFixtureLint),
        Box::new(IdentifierCollisionLint),
    ]
}

/// Run every built-in lint over `manifest`.
pub fn run_lints(manifest: &Manifest) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in builtin_lints() {
        lint.check(manifest, &mut diagnostics);
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_clean_manifest_has_no_diagnostics() {
        let manifest =
            Manifest::from_str("PASS: y_array_empty.json\nFAIL: n_object_trailing_comma.json\n")
                .unwrap();
        assert!(run_lints(&manifest).is_empty());
    }

    #[test]
    fn test_lint_names_are_unique() {
        let lints = builtin_lints();
        let mut names: Vec<_> = lints.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), lints.len());
        assert!(lints.iter().all(|l| !l.description().is_empty()));
    }

    #[test]
    fn test_run_lints_collects_all() {
        let manifest = Manifest::from_str(
            "PASS: y_foo.json\nPASS: y_foo.json\nPASS: y_bar.jsonc\n",
        )
        .unwrap();
        let lints: Vec<_> = run_lints(&manifest)
            .into_iter()
            .map(|d| d.lint)
            .collect();
        assert_eq!(
            lints,
            vec!["fixture-extension", "duplicate-fixture", "identifier-collision"]
        );
    }
}
