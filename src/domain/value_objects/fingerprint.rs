//! Fingerprint Value Object
//!
//! A short, validated, immutable content identifier. Used both as the
//! manifest key and as the file stem of a bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Twelve lowercase hex characters taken from a SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fingerprint '{0}': expected {len} lowercase hex characters", len = Fingerprint::LEN)]
pub struct FingerprintParseError(String);

impl Fingerprint {
    /// Number of hex characters kept from the digest
    pub const LEN: usize = 12;

    /// Build a fingerprint from a raw digest, keeping the leading hex characters.
    pub fn from_digest(digest: &[u8]) -> Self {
        let mut hex = String::with_capacity(Self::LEN);
        for byte in digest.iter().take(Self::LEN.div_ceil(2)) {
            hex.push_str(&format!("{:02x}", byte));
        }
        hex.truncate(Self::LEN);
        Self(hex)
    }

    /// Parse a fingerprint previously rendered with `as_str`.
    pub fn parse(s: &str) -> Result<Self, FingerprintParseError> {
        let valid = s.len() == Self::LEN
            && s
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(FingerprintParseError(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = FingerprintParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
