mod commands;
mod logging;
mod ops;
mod reports;
mod settings;
mod target;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbosity());
    cli.run()
}
