//! DNSBL resolution for spamcheck.
//!
//! The network half of a blackhole-list check: takes a validated
//! [`Address`](spamcheck_core::Address), builds the reversed-octet query
//! name, resolves it, and classifies the answer.
//!
//! # Architecture
//!
//! - [`NameLookup`] is the resolution seam; [`SystemLookup`] implements it
//!   over the system-configured hickory resolver, tests implement it with
//!   scripted answers.
//! - [`DnsblChecker`] owns a lookup and a zone and turns addresses into
//!   [`Listing`](spamcheck_core::Listing)s.
//! - [`HostReport`] is the batch-friendly, order-preserving per-input
//!   outcome handed to presentation layers.
//!
//! A name-not-found answer is the *expected* negative signal and is never
//! reported as an error; transport and server failures are, so a flaky
//! network can never make a listed host look clean.

pub mod checker;
pub mod error;
pub mod lookup;
pub mod report;

pub use checker::DnsblChecker;
pub use error::{ResolverError, Result};
pub use lookup::{LookupAnswer, NameLookup, SystemLookup};
pub use report::{HostReport, HostStatus};
