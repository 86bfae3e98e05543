use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use suitegen_manifest::{ManifestFile, SortOrder, Target};
use tracing::{debug, info};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::{GenerateSettings, load_config},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Fixture directory prefix used in generated paths (overrides the config file)
    pub fixtures: Option<String>,

    /// Manifest to read (defaults to stdin)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Write generated code to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Test framework to generate for (junit, rust)
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Ordering within each section (manifest, identifier)
    #[arg(long)]
    pub ordering: Option<SortOrder>,

    /// Path to suitegen.toml (defaults to ./suitegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref()).unwrap_or_exit();
        let settings = GenerateSettings::resolve(
            self.fixtures.as_deref(),
            self.target,
            self.ordering,
            &config,
        )?;

        let file = ManifestFile::open_or_stdin(self.manifest.as_deref()).unwrap_or_exit();
        info!(
            manifest = file.name(),
            entries = file.manifest().len(),
            "manifest parsed"
        );

        let generation = ops::generate(file.manifest(), &settings, &config);
        for diag in &generation.diagnostics {
            eprintln!("{}", diag);
        }

        match &self.output {
            Some(path) => {
                let report = generation.write_to(path)?;
                report.render(&mut TerminalOutput::new());
            }
            None => {
                debug!("writing generated code to stdout");
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(generation.code.as_bytes())
                    .wrap_err("failed to write generated code to stdout")?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
