//! Per-host check reports for presentation layers.

use serde::Serialize;
use spamcheck_core::ReturnCode;
use std::net::Ipv4Addr;

/// Classified outcome for a single input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostStatus {
    /// Blackhole zone answered; return codes attached.
    Listed(Vec<Ipv4Addr>),
    /// Zone has no entry for this address.
    NotListed,
    /// Input never reached resolution: not a dotted-quad address.
    InvalidAddress,
    /// Resolution failed. Distinct from [`Self::NotListed`] so a
    /// transient fault is never reported as a clean host.
    Fault(String),
}

/// One row of batch output: the raw input and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    /// Input string exactly as provided.
    pub host: String,
    /// Classified outcome.
    pub status: HostStatus,
}

impl HostReport {
    /// Build a report for an input.
    #[must_use]
    pub fn new(host: &str, status: HostStatus) -> Self {
        Self {
            host: host.to_string(),
            status,
        }
    }

    /// Recognized sub-list labels for a listed host, deduplicated in
    /// answer order. Empty for every other status.
    #[must_use]
    pub fn code_labels(&self) -> Vec<&'static str> {
        let HostStatus::Listed(records) = &self.status else {
            return Vec::new();
        };

        let mut labels = Vec::new();
        for record in records {
            let label = ReturnCode::from_answer(*record).label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}
