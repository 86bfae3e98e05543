use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use suitegen_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::load_config,
};

/// How the check report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Manifest to read (defaults to stdin)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Path to suitegen.toml (defaults to ./suitegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        // Reject a malformed config file.
        load_config(self.config.as_deref()).unwrap_or_exit();

        let file = ManifestFile::open_or_stdin(self.manifest.as_deref()).unwrap_or_exit();
        let report = ops::check(&file);

        match self.format {
            ReportFormat::Text => report.render(&mut TerminalOutput::new()),
            ReportFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?;
                println!("{}", json);
            }
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
