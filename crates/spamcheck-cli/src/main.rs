//! spamcheck - DNSBL reputation checker
//!
//! Checks IP addresses against a DNS blackhole list.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    spamcheck_cli::run().await
}
