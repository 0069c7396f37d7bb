//! DNSBL query-name construction.
//!
//! Standard DNSBL pattern: reverse the address octets and query under the
//! blackhole zone. Checking `1.2.3.4` against `zen.spamhaus.org` queries
//! `4.3.2.1.zen.spamhaus.org.`.

use crate::Address;

/// Blackhole zone queried when none is configured.
pub const DEFAULT_ZONE: &str = "zen.spamhaus.org";

/// Reverse an address's octets for DNSBL lookup.
///
/// Converts `1.2.3.4` into `4.3.2.1` (without zone suffix).
#[must_use]
pub fn reverse_octets(addr: &Address) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{d}.{c}.{b}.{a}")
}

/// Normalize a zone origin to fully-qualified form.
///
/// A trailing dot keeps resolver search domains out of the query.
#[must_use]
pub fn normalize_zone(zone: &str) -> String {
    format!("{}.", zone.trim_end_matches('.'))
}

/// Build the full DNSBL query name for an address under a zone.
///
/// Example: `127.0.0.2` under `zen.spamhaus.org` ->
/// `"2.0.0.127.zen.spamhaus.org."`.
#[must_use]
pub fn build_query_name(addr: &Address, zone: &str) -> String {
    format!("{}.{}", reverse_octets(addr), normalize_zone(zone))
}
