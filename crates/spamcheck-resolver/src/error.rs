//! Error types for DNSBL resolution.

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Errors from DNSBL resolution.
///
/// A name-not-found answer is not an error; it surfaces as
/// [`Listing::NotListed`](spamcheck_core::Listing::NotListed). These
/// variants cover genuine faults that must stay distinguishable from a
/// clean host.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The DNS round trip failed: timeout, SERVFAIL, network unreachable.
    #[error("dns resolution failed for {name}: {cause}")]
    Resolution {
        /// Query name that failed.
        name: String,
        /// Underlying resolver error text.
        cause: String,
    },
}
