//! `spamcheck config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;
use spamcheck_core::query::DEFAULT_ZONE;

pub fn execute(format: OutputFormat, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(format),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "zone:".bold(),
        config.zone.as_deref().unwrap_or(DEFAULT_ZONE)
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );
    println!("  {} {}", "no_color:".bold(), config.no_color);

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "zone" => {
            config.zone = Some(value.to_string());
            println!(
                "{} Blackhole zone set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!(
                "{} Output format set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        "no_color" => {
            config.no_color = value.parse()?;
            println!("{} no_color set to {}.", "Success:".green().bold(), value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 zone           - Blackhole zone to query\n  \
                 output_format  - Default output format (pretty/json/csv)\n  \
                 no_color       - Disable colored output (true/false)",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
