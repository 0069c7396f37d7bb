//! Dotted-quad IPv4 address validation.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A validated IPv4 address, parsed from dotted-quad notation.
///
/// Parsing accepts exactly four dot-separated decimal segments of one to
/// three digits, each in 0-255, with nothing before or after. Leading
/// zeros are accepted (`"192.168.01.1"` parses to `192.168.1.1`); this
/// leniency is deliberate and [`Display`](fmt::Display) always renders the
/// canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 4]);

impl Address {
    /// Construct from raw octets.
    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// The four octets in network order.
    #[must_use]
    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Whether `input` is a well-formed dotted-quad address.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        input.parse::<Self>().is_ok()
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidAddress(s.to_string());

        let mut octets = [0u8; 4];
        let mut segments = s.split('.');

        for octet in &mut octets {
            let segment = segments.next().ok_or_else(invalid)?;
            // One to three decimal digits; leading zeros tolerated.
            if segment.is_empty()
                || segment.len() > 3
                || !segment.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            let value: u16 = segment.parse().map_err(|_| invalid())?;
            *octet = u8::try_from(value).map_err(|_| invalid())?;
        }

        if segments.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
