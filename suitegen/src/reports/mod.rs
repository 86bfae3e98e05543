//! Report data structures for commands.
//!
//! Commands collect data into a report, then render it to an `Output`.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, EntryCounts};
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
