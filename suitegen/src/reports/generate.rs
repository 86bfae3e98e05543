//! Generate command report data structures.

use std::path::PathBuf;

use suitegen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing a generated suite to a file.
#[derive(Debug)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub target: String,
    pub supported: usize,
    pub unsupported: usize,
    pub result: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self.result {
            WriteResult::Written => out.preformatted(&format!(
                "Wrote {} {} tests ({} supported, {} unsupported) to {}",
                self.supported + self.unsupported,
                self.target,
                self.supported,
                self.unsupported,
                self.path.display()
            )),
            WriteResult::Unchanged => {
                out.preformatted(&format!("{} is up to date", self.path.display()))
            }
        }
    }
}
