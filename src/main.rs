use anyhow::Result;
use clap::Parser;
use goto::cli::Cli;
use goto::{commands, logging};

fn main() -> Result<()> {
    logging::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    commands::execute(cli)
}
