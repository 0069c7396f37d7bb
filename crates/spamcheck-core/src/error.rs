//! Error types for core address handling.

use thiserror::Error;

/// Errors from address parsing and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input is not a well-formed dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),
}
