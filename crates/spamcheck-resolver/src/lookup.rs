//! Name lookup seam over the system resolver.

use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

use crate::error::{ResolverError, Result};

/// Answer from a single DNSBL name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAnswer {
    /// Address records returned by the zone.
    Records(Vec<Ipv4Addr>),
    /// The name does not exist — the expected negative signal.
    NoSuchName,
}

/// Address resolution seam.
///
/// Production uses [`SystemLookup`]; tests swap in scripted
/// implementations so checks run against a mock zone.
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Resolve `name` to its A records.
    ///
    /// Implementations return [`LookupAnswer::NoSuchName`] for NXDOMAIN
    /// and empty answers, and an error only for genuine faults.
    async fn lookup(&self, name: &str) -> Result<LookupAnswer>;
}

/// Lookup over the system-configured hickory resolver.
pub struct SystemLookup {
    resolver: TokioResolver,
}

impl SystemLookup {
    /// Build from system DNS configuration, falling back to defaults
    /// when no system config can be read.
    #[must_use]
    pub fn new() -> Self {
        let resolver = TokioResolver::builder_tokio()
            .map(|builder| builder.build())
            .unwrap_or_else(|_| {
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            });

        Self { resolver }
    }
}

impl Default for SystemLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameLookup for SystemLookup {
    async fn lookup(&self, name: &str) -> Result<LookupAnswer> {
        match self.resolver.lookup_ip(name).await {
            Ok(response) => {
                // DNSBL return codes are A records; AAAA answers carry
                // no code and count as no answer.
                let records: Vec<Ipv4Addr> = response
                    .iter()
                    .filter_map(|ip| match ip {
                        IpAddr::V4(v4) => Some(v4),
                        IpAddr::V6(_) => None,
                    })
                    .collect();

                if records.is_empty() {
                    Ok(LookupAnswer::NoSuchName)
                } else {
                    Ok(LookupAnswer::Records(records))
                }
            }
            Err(e) => {
                let message = e.to_string();
                if is_negative_answer(&message) {
                    debug!(name = name, "name not found");
                    Ok(LookupAnswer::NoSuchName)
                } else {
                    Err(ResolverError::Resolution {
                        name: name.to_string(),
                        cause: message,
                    })
                }
            }
        }
    }
}

/// Classify a resolver error message as the expected negative answer.
///
/// `lookup_ip` surfaces NXDOMAIN and empty answers as errors; transport
/// and server failures must not be mistaken for them.
fn is_negative_answer(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("no records found")
        || lower.contains("no record found")
        || lower.contains("nxdomain")
}
