//! Check command report data structures.

use serde::Serialize;
use suitegen_codegen::lint::Diagnostic;

use super::output::{Output, Report};

/// Entry tallies for a parsed manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryCounts {
    pub total: usize,
    pub supported: usize,
    pub unsupported: usize,
    pub accept: usize,
    pub reject: usize,
    /// Identifiers produced by more than one entry.
    pub collisions: usize,
}

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Display name of the manifest.
    pub manifest: String,
    pub counts: EntryCounts,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.warning(&diag.to_string());
        }

        out.section(&format!("{} ({} entries)", self.manifest, self.counts.total));
        out.key_value_indented("supported", &self.counts.supported.to_string());
        out.key_value_indented("unsupported", &self.counts.unsupported.to_string());
        out.key_value_indented("accept (y_)", &self.counts.accept.to_string());
        out.key_value_indented("reject (n_)", &self.counts.reject.to_string());
        out.key_value_indented("colliding identifiers", &self.counts.collisions.to_string());
        out.newline();

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.manifest));
        } else {
            let errors = self
                .diagnostics
                .iter()
                .filter(|d| d.severity.is_error())
                .count();
            out.preformatted(&format!("✗ {} has {} error(s)", self.manifest, errors));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            manifest: "results.txt".to_string(),
            counts: EntryCounts {
                total: 3,
                supported: 2,
                unsupported: 1,
                accept: 2,
                reject: 1,
                collisions: 0,
            },
            diagnostics,
        }
    }

    #[test]
    fn test_valid_report() {
        let report = report(vec![Diagnostic::warning("fixture-extension", "odd").at_line(2)]);
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(out.stderr, vec!["warning: odd (at line 2)"]);
        assert_eq!(out.stdout[0], "results.txt (3 entries):");
        assert_eq!(out.stdout.last().unwrap(), "✓ results.txt is valid");
    }

    #[test]
    fn test_invalid_report() {
        let report = report(vec![Diagnostic::error("custom", "broken")]);
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.stdout.last().unwrap(), "✗ results.txt has 1 error(s)");
    }

    #[test]
    fn test_json_shape() {
        let report = report(vec![Diagnostic::warning("duplicate-fixture", "again").at_line(4)]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["manifest"], "results.txt");
        assert_eq!(value["counts"]["supported"], 2);
        assert_eq!(value["diagnostics"][0]["severity"], "warning");
        assert_eq!(value["diagnostics"][0]["location"], "line 4");
    }
}
