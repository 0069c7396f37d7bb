//! Core types for DNSBL reputation checks.
//!
//! A DNSBL (DNS-based blackhole list) is queried by reversing the octets of
//! an IPv4 address and looking the result up under a reputation zone:
//! checking `1.2.3.4` against `zen.spamhaus.org` resolves
//! `4.3.2.1.zen.spamhaus.org.`. An answer means the address is listed; a
//! name-not-found response means it is clean.
//!
//! This crate holds the pure half of that protocol:
//!
//! - **[`Address`]**: a validated dotted-quad IPv4 address
//! - **[`query`]**: reversed-octet query-name construction
//! - **[`check`]**: the [`Listing`] classification and return-code
//!   interpretation
//!
//! No I/O happens here; resolution lives in `spamcheck-resolver`.

pub mod address;
pub mod check;
pub mod error;
pub mod query;

pub use address::Address;
pub use check::{Listing, ReturnCode};
pub use error::CoreError;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
