//! Check operation - manifest validation.

use suitegen_codegen::lint::run_lints;
use suitegen_manifest::ManifestFile;
use tracing::debug;

use crate::reports::{CheckReport, EntryCounts};

/// Execute the check operation.
///
/// Tallies the manifest entries and runs the built-in lints.
pub fn check(file: &ManifestFile) -> CheckReport {
    let manifest = file.manifest();

    let accept = manifest
        .entries()
        .iter()
        .filter(|e| e.polarity.is_accept())
        .count();
    let supported = manifest.supported().count();

    let counts = EntryCounts {
        total: manifest.len(),
        supported,
        unsupported: manifest.len() - supported,
        accept,
        reject: manifest.len() - accept,
        collisions: manifest.occurrences().collisions().count(),
    };

    let diagnostics = run_lints(manifest);
    debug!(
        manifest = file.name(),
        entries = counts.total,
        diagnostics = diagnostics.len(),
        "checked manifest"
    );

    CheckReport {
        manifest: file.name().to_string(),
        counts,
        diagnostics,
    }
}
