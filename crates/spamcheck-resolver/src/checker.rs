//! DNSBL check execution.

use spamcheck_core::{query, Address, Listing};
use tracing::{debug, warn};

use crate::error::Result;
use crate::lookup::{LookupAnswer, NameLookup, SystemLookup};
use crate::report::{HostReport, HostStatus};

/// Performs DNSBL checks against a single blackhole zone.
///
/// One outbound query per check; no retries, no caching. The resolver's
/// default timeout policy applies.
pub struct DnsblChecker<L = SystemLookup> {
    lookup: L,
    zone: String,
}

impl DnsblChecker<SystemLookup> {
    /// Checker over the system resolver.
    #[must_use]
    pub fn new(zone: &str) -> Self {
        Self::with_lookup(SystemLookup::new(), zone)
    }
}

impl<L: NameLookup> DnsblChecker<L> {
    /// Checker over a custom lookup implementation.
    pub fn with_lookup(lookup: L, zone: &str) -> Self {
        Self {
            lookup,
            zone: zone.to_string(),
        }
    }

    /// Zone this checker queries.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Check one validated address against the zone.
    ///
    /// Returns exactly one of [`Listing::Listed`] or
    /// [`Listing::NotListed`] whenever the zone answers; a transport or
    /// server failure is an error, never `NotListed`.
    pub async fn check(&self, address: &Address) -> Result<Listing> {
        let name = query::build_query_name(address, &self.zone);
        debug!(name = %name, "querying blackhole zone");

        match self.lookup.lookup(&name).await? {
            LookupAnswer::Records(records) => {
                debug!(address = %address, codes = records.len(), "listed");
                Ok(Listing::Listed(records))
            }
            LookupAnswer::NoSuchName => Ok(Listing::NotListed),
        }
    }

    /// Check one raw input string, recovering failures into a report.
    ///
    /// Invalid syntax and resolution faults become report rows instead of
    /// errors so one bad host never aborts a batch.
    pub async fn check_host(&self, input: &str) -> HostReport {
        let Ok(address) = input.parse::<Address>() else {
            return HostReport::new(input, HostStatus::InvalidAddress);
        };

        match self.check(&address).await {
            Ok(Listing::Listed(records)) => HostReport::new(input, HostStatus::Listed(records)),
            Ok(Listing::NotListed) => HostReport::new(input, HostStatus::NotListed),
            Err(e) => {
                warn!(host = input, error = %e, "check failed");
                HostReport::new(input, HostStatus::Fault(e.to_string()))
            }
        }
    }

    /// Check a batch of inputs sequentially, preserving input order.
    ///
    /// Produces exactly one report per input.
    pub async fn check_all(&self, inputs: &[String]) -> Vec<HostReport> {
        let mut reports = Vec::with_capacity(inputs.len());
        for input in inputs {
            reports.push(self.check_host(input).await);
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolverError;
    use async_trait::async_trait;
    use std::net::Ipv4Addr;
    use std::sync::Mutex;

    /// Scripted zone: 127.0.0.2 is listed, 127.9.9.9 faults, everything
    /// else is clean. Records every query name it sees.
    struct ScriptedLookup {
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedLookup {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NameLookup for ScriptedLookup {
        async fn lookup(&self, name: &str) -> Result<LookupAnswer> {
            self.seen.lock().unwrap().push(name.to_string());

            if name.starts_with("2.0.0.127.") {
                Ok(LookupAnswer::Records(vec![Ipv4Addr::new(127, 0, 0, 2)]))
            } else if name.starts_with("9.9.9.127.") {
                Err(ResolverError::Resolution {
                    name: name.to_string(),
                    cause: "request timed out".to_string(),
                })
            } else {
                Ok(LookupAnswer::NoSuchName)
            }
        }
    }

    fn checker() -> DnsblChecker<ScriptedLookup> {
        DnsblChecker::with_lookup(ScriptedLookup::new(), "zen.spamhaus.org")
    }

    #[tokio::test]
    async fn listed_address_classified_with_codes() {
        let checker = checker();
        let addr: Address = "127.0.0.2".parse().unwrap();

        let listing = checker.check(&addr).await.unwrap();
        assert_eq!(
            listing,
            Listing::Listed(vec![Ipv4Addr::new(127, 0, 0, 2)])
        );
    }

    #[tokio::test]
    async fn clean_address_classified_not_listed() {
        let checker = checker();
        let addr: Address = "127.0.0.1".parse().unwrap();

        let listing = checker.check(&addr).await.unwrap();
        assert_eq!(listing, Listing::NotListed);
    }

    #[tokio::test]
    async fn fault_is_an_error_not_a_clean_verdict() {
        let checker = checker();
        let addr: Address = "127.9.9.9".parse().unwrap();

        let err = checker.check(&addr).await.unwrap_err();
        assert!(matches!(err, ResolverError::Resolution { .. }));
    }

    #[tokio::test]
    async fn check_queries_the_reversed_name() {
        let checker = checker();
        let addr: Address = "127.0.0.2".parse().unwrap();
        checker.check(&addr).await.unwrap();

        let seen = checker.lookup.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["2.0.0.127.zen.spamhaus.org."]);
    }

    #[tokio::test]
    async fn repeated_checks_are_idempotent() {
        let checker = checker();
        let addr: Address = "127.0.0.2".parse().unwrap();

        let first = checker.check(&addr).await.unwrap();
        let second = checker.check(&addr).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn batch_preserves_input_order_and_recovers_per_host() {
        let checker = checker();
        let inputs: Vec<String> = ["127.0.0.2", "127.0.0.1", "999.1.1.1", "127.9.9.9"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let reports = checker.check_all(&inputs).await;

        assert_eq!(reports.len(), inputs.len());
        for (report, input) in reports.iter().zip(&inputs) {
            assert_eq!(&report.host, input);
        }
        assert!(matches!(reports[0].status, HostStatus::Listed(_)));
        assert_eq!(reports[1].status, HostStatus::NotListed);
        assert_eq!(reports[2].status, HostStatus::InvalidAddress);
        assert!(matches!(reports[3].status, HostStatus::Fault(_)));
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_resolver() {
        let checker = checker();
        let report = checker.check_host("abc.1.1.1").await;

        assert_eq!(report.status, HostStatus::InvalidAddress);
        assert!(checker.lookup.seen.lock().unwrap().is_empty());
    }
}
