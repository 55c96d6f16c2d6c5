//! chklist - an interactive terminal checklist
//!
//! This is the main entry point. It parses CLI arguments, layers them over
//! the default configuration and hands over to the terminal loop.

use anyhow::{Context, Result};
use clap::Parser;

use chklist::cli::Cli;
use chklist::config::Config;
use chklist::{logging, run};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    logging::initialize().context("failed to initialize logging")?;

    // Defaults, then CLI overrides
    let mut config = Config::default();
    cli.apply_to_config(&mut config);
    config.validate()?;

    tracing::debug!(?config, "configuration resolved");

    run::run_terminal_mode(&config)?;

    Ok(())
}
