//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use spamcheck_core::query::DEFAULT_ZONE;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    // Flag > config file > built-in default
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    if cli.no_color || config.no_color {
        colored::control::set_override(false);
    }

    let zone = cli
        .zone
        .clone()
        .or_else(|| config.zone.clone())
        .unwrap_or_else(|| DEFAULT_ZONE.to_string());

    match cli.command {
        Some(Commands::Config(args)) => commands::config::execute(output_format, args),
        None => commands::check::execute(&zone, output_format, cli.hosts).await,
    }
}

/// Console logging for the library crates' tracing output.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
