//! Generate operation - render a manifest to test source.

use std::path::Path;

use eyre::{Context, Result};
use suitegen_codegen::{GenerateOptions, Generator, lint::Diagnostic, lint::run_lints};
use suitegen_core::OutputFile;
use suitegen_manifest::{Config, Manifest};
use tracing::{debug, info};

use crate::{reports::GenerateReport, settings::GenerateSettings, target::test_target};

/// A rendered suite and the facts needed to report on it.
#[derive(Debug)]
pub struct Generation {
    pub code: String,
    pub target: String,
    pub supported: usize,
    pub unsupported: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, settings: &GenerateSettings, config: &Config) -> Generation {
    let target = test_target(settings.target, config);
    let generator = Generator::new(
        manifest,
        GenerateOptions::new(settings.fixtures.as_str()).order(settings.order),
    );
    let sections = generator.sections();

    debug!(
        target = target.name(),
        order = ?settings.order,
        fixtures = %settings.fixtures,
        "rendering suite"
    );
    let code = generator.render(target.as_ref());

    Generation {
        code,
        target: target.name().to_string(),
        supported: sections.supported.len(),
        unsupported: sections.unsupported.len(),
        diagnostics: run_lints(manifest),
    }
}

impl Generation {
    /// Write the rendered suite to `path`.
    pub fn write_to(&self, path: &Path) -> Result<GenerateReport> {
        let file = OutputFile::new(path, self.code.as_str());
        let result = file
            .write()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), ?result, "output written");

        Ok(GenerateReport {
            path: path.to_path_buf(),
            target: self.target.clone(),
            supported: self.supported,
            unsupported: self.unsupported,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use suitegen_core::WriteResult;
    use suitegen_manifest::{SortOrder, Target};
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = "\
FAIL: n_object_trailing_comma.json
PASS: y_array_empty.json
PASS: y_array_empty.json
";

    fn settings(target: Target) -> GenerateSettings {
        GenerateSettings {
            fixtures: "fixtures".to_string(),
            target,
            order: SortOrder::Manifest,
        }
    }

    #[test]
    fn test_generate_junit() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let generation = generate(&manifest, &settings(Target::JUnit), &Config::default());

        assert_eq!(generation.target, "junit");
        assert_eq!(generation.supported, 2);
        assert_eq!(generation.unsupported, 1);
        assert!(generation.code.contains("public void yesArrayEmpty()"));
        assert!(generation.code.contains("public void yesArrayEmpty_2()"));
        assert!(generation.code.contains("\"fixtures/y_array_empty.json\""));
        assert!(
            generation
                .diagnostics
                .iter()
                .any(|d| d.lint == "duplicate-fixture")
        );
    }

    #[test]
    fn test_generate_rust_uses_configured_parser() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let config = Config::from_str("[rust]\nparser = \"crate::parse\"\n").unwrap();
        let generation = generate(&manifest, &settings(Target::Rust), &config);

        assert_eq!(generation.target, "rust");
        assert!(generation.code.contains("fn yes_array_empty_2()"));
        assert!(generation.code.contains("crate::parse(&text)"));
    }

    #[test]
    fn test_write_to_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("Suite.java");
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let generation = generate(&manifest, &settings(Target::JUnit), &Config::default());

        let first = generation.write_to(&path).unwrap();
        assert_eq!(first.result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), generation.code);

        let second = generation.write_to(&path).unwrap();
        assert_eq!(second.result, WriteResult::Unchanged);
    }
}
