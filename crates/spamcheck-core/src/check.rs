//! Classification of DNSBL answers.
//!
//! Zones answer a listed address with A records in `127.0.0.0/8`; the last
//! octet encodes which sub-list fired. For Spamhaus zen:
//!
//! - 127.0.0.2 = SBL (verified spam source)
//! - 127.0.0.3 = SBL CSS (compromised/snowshoe)
//! - 127.0.0.4-7 = XBL (exploited host, open proxy)
//! - 127.0.0.10-11 = PBL (policy block, dynamic ranges)
//! - NXDOMAIN = clean (not listed)

use std::net::Ipv4Addr;

/// Outcome of a DNSBL check for a validated address.
///
/// Resolution faults are deliberately not a variant here: a timeout or
/// SERVFAIL is an error on the check itself, never a clean verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The zone answered; the address is listed. Carries the return codes.
    Listed(Vec<Ipv4Addr>),
    /// The zone returned no such name; the address is not listed.
    NotListed,
}

impl Listing {
    /// Whether this outcome is a listing.
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        matches!(self, Self::Listed(_))
    }
}

/// Interpretation of a zen-style `127.0.0.x` return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    /// Spamhaus Block List: verified spam source.
    Sbl,
    /// SBL CSS: compromised or snowshoe source.
    SblCss,
    /// Exploits Block List: exploited host, open proxy, worm.
    Xbl,
    /// Policy Block List: dynamic/end-user address space.
    Pbl,
    /// Unrecognized return code (non-zen zone or future code).
    Unknown(u8),
}

impl ReturnCode {
    /// Interpret an answer record as a return code.
    #[must_use]
    pub const fn from_answer(answer: Ipv4Addr) -> Self {
        match answer.octets() {
            [127, 0, 0, 2] => Self::Sbl,
            [127, 0, 0, 3] => Self::SblCss,
            [127, 0, 0, 4..=7] => Self::Xbl,
            [127, 0, 0, 10 | 11] => Self::Pbl,
            [_, _, _, last] => Self::Unknown(last),
        }
    }

    /// Human-readable label for this code.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sbl => "SBL",
            Self::SblCss => "SBL CSS",
            Self::Xbl => "XBL",
            Self::Pbl => "PBL",
            Self::Unknown(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_code_mapping() {
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 2)),
            ReturnCode::Sbl
        );
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 3)),
            ReturnCode::SblCss
        );
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 4)),
            ReturnCode::Xbl
        );
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 7)),
            ReturnCode::Xbl
        );
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 10)),
            ReturnCode::Pbl
        );
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 11)),
            ReturnCode::Pbl
        );
    }

    #[test]
    fn unrecognized_codes_are_unknown() {
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(127, 0, 0, 255)),
            ReturnCode::Unknown(255)
        );
        // Answers outside 127.0.0.0/8 carry no zen meaning.
        assert_eq!(
            ReturnCode::from_answer(Ipv4Addr::new(10, 0, 0, 2)),
            ReturnCode::Unknown(2)
        );
    }

    #[test]
    fn listing_reports_listed_state() {
        let listed = Listing::Listed(vec![Ipv4Addr::new(127, 0, 0, 2)]);
        assert!(listed.is_listed());
        assert!(!Listing::NotListed.is_listed());
    }
}
