//! Output formatting for check reports.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use spamcheck_resolver::{HostReport, HostStatus};
use std::fmt;
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored status table
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv",
                s
            ),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Startup banner for the interactive table view.
pub const BANNER: &str = r"
+---------------------------------------------------------+
|                       spamcheck                         |
|                       =========                         |
+---------------------------------------------------------+
| Checks whether IP addresses belong to known spammers or |
| legitimate sources by querying a DNS blackhole list     |
| (default: the Spamhaus zen zone). Listed addresses come |
| back as Spammer, clean ones as Legitimate.              |
+---------------------------------------------------------+
";

/// Print the startup banner.
pub fn print_banner() {
    println!("{BANNER}");
}

/// Render one report row per input, in input order.
pub fn print_reports(reports: &[HostReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
        OutputFormat::Csv => {
            println!("host,status,detail");
            for report in reports {
                println!(
                    "{},{},\"{}\"",
                    report.host,
                    status_label(&report.status),
                    detail(report)
                );
            }
        }
        OutputFormat::Pretty => {
            println!(" {:>17} ║ {}", "Host", "Status");
            println!("═══════════════════╬════════════");
            for report in reports {
                print_pretty_row(report);
            }
        }
    }

    Ok(())
}

/// One colored table row: blue host, status in its verdict color.
fn print_pretty_row(report: &HostReport) {
    let host = format!("{:>17}", report.host).blue();

    match &report.status {
        HostStatus::Listed(_) => {
            let codes = detail(report);
            if codes.is_empty() {
                println!(" {host} ║ {}", "Spammer".red());
            } else {
                println!(" {host} ║ {} {}", "Spammer".red(), format!("({codes})").dimmed());
            }
        }
        HostStatus::NotListed => {
            println!(" {host} ║ {}", "Legitimate".green());
        }
        HostStatus::InvalidAddress => {
            println!(" {host} ║ {}", "Invalid IP".red());
        }
        HostStatus::Fault(cause) => {
            println!(" {host} ║ {} {}", "Unknown".yellow(), format!("({cause})").dimmed());
        }
    }
}

/// Stable machine-readable status label.
fn status_label(status: &HostStatus) -> &'static str {
    match status {
        HostStatus::Listed(_) => "spammer",
        HostStatus::NotListed => "legitimate",
        HostStatus::InvalidAddress => "invalid",
        HostStatus::Fault(_) => "unknown",
    }
}

/// Supplementary column: sub-list labels or the fault cause.
fn detail(report: &HostReport) -> String {
    match &report.status {
        HostStatus::Listed(_) => report.code_labels().join(", "),
        HostStatus::Fault(cause) => cause.clone(),
        HostStatus::NotListed | HostStatus::InvalidAddress => String::new(),
    }
}
