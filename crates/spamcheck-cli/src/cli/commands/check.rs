//! The default command: check hosts against the blackhole zone.

use anyhow::Result;
use spamcheck_resolver::DnsblChecker;

use crate::output::{self, OutputFormat};

/// Execute a batch check and render one status row per input.
pub async fn execute(zone: &str, format: OutputFormat, hosts: Vec<String>) -> Result<()> {
    // Banner and prompts belong to the table view only; JSON and CSV
    // stay machine-readable.
    if format == OutputFormat::Pretty {
        output::print_banner();
    }

    let hosts = if hosts.is_empty() {
        prompt_hosts()?
    } else {
        hosts
    };

    if hosts.is_empty() {
        anyhow::bail!("no IP addresses provided");
    }

    let checker = DnsblChecker::new(zone);
    let reports = checker.check_all(&hosts).await;

    output::print_reports(&reports, format)?;

    if format == OutputFormat::Pretty {
        println!();
        println!("Thank you for using spamcheck!");
    }

    Ok(())
}

/// Interactive fallback: one whitespace-separated line from stdin.
fn prompt_hosts() -> Result<Vec<String>> {
    println!("No IP addresses provided as arguments.");
    println!("Enter IP addresses separated by spaces:");

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(line.split_whitespace().map(str::to_string).collect())
}
