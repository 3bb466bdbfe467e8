//! Trigger Value Object
//!
//! A validated, immutable digest of an identifier set. This is the value a
//! deployment resource stores under its `redeployment` trigger and compares
//! across planning passes.

use std::fmt;

use serde::Serialize;

use super::HashAlgorithm;
use crate::error::{TriggerError, TriggerResult};

/// Lowercase hex digest plus the algorithm that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TriggerValue {
    algorithm: HashAlgorithm,
    hex: String,
}

impl TriggerValue {
    /// Render a digest through its `LowerHex` impl
    pub(crate) fn from_digest(algorithm: HashAlgorithm, digest: impl fmt::LowerHex) -> Self {
        Self {
            algorithm,
            hex: format!("{:x}", digest),
        }
    }

    /// Parse a previously recorded trigger value.
    ///
    /// Only the exact lowercase form is accepted, since that is the only form
    /// this calculator ever emits.
    pub fn parse(value: &str, algorithm: HashAlgorithm) -> TriggerResult<Self> {
        let well_formed = value.len() == algorithm.hex_len()
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if !well_formed {
            return Err(TriggerError::MalformedTrigger {
                value: value.to_string(),
                algorithm: algorithm.name(),
                expected_len: algorithm.hex_len(),
            });
        }

        Ok(Self {
            algorithm,
            hex: value.to_string(),
        })
    }

    /// Parse a recorded value, inferring the algorithm from its length
    pub fn parse_any(value: &str) -> TriggerResult<Self> {
        let algorithm = HashAlgorithm::ALL
            .into_iter()
            .find(|a| a.hex_len() == value.len())
            .unwrap_or_default();
        Self::parse(value, algorithm)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Check if this value matches a raw recorded string
    pub fn matches_str(&self, s: &str) -> bool {
        self.hex == s
    }
}

impl fmt::Display for TriggerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for TriggerValue {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA1: &str = "97d170e1550eee4afc0af065b78cda302a97674c";

    #[test]
    fn from_digest_renders_lowercase_hex() {
        use sha1::digest::generic_array::{typenum::U3, GenericArray};

        let digest = GenericArray::<u8, U3>::clone_from_slice(&[0x00, 0xab, 0xff]);
        let value = TriggerValue::from_digest(HashAlgorithm::Sha1, digest);
        assert_eq!(value.as_str(), "00abff");
    }

    #[test]
    fn from_digest_keeps_leading_zeros_of_full_digest() {
        use sha1::{Digest, Sha1};

        let value = TriggerValue::from_digest(HashAlgorithm::Sha1, Sha1::digest(b"[]"));
        assert_eq!(value.as_str(), EMPTY_SHA1);
        assert_eq!(value.as_str().len(), HashAlgorithm::Sha1.hex_len());
    }

    #[test]
    fn parse_accepts_valid_sha1() {
        let value = TriggerValue::parse(EMPTY_SHA1, HashAlgorithm::Sha1).unwrap();
        assert_eq!(value.as_str(), EMPTY_SHA1);
        assert_eq!(value.algorithm(), HashAlgorithm::Sha1);
    }

    #[test]
    fn parse_rejects_uppercase() {
        let upper = EMPTY_SHA1.to_uppercase();
        assert!(TriggerValue::parse(&upper, HashAlgorithm::Sha1).is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = TriggerValue::parse("abc", HashAlgorithm::Sha1).unwrap_err();
        assert!(matches!(
            err,
            TriggerError::MalformedTrigger {
                expected_len: 40,
                ..
            }
        ));
    }

    #[test]
    fn parse_any_infers_algorithm_from_length() {
        let sha256 = "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945";
        assert_eq!(
            TriggerValue::parse_any(sha256).unwrap().algorithm(),
            HashAlgorithm::Sha256
        );
        assert_eq!(
            TriggerValue::parse_any(EMPTY_SHA1).unwrap().algorithm(),
            HashAlgorithm::Sha1
        );
        assert!(TriggerValue::parse_any("not-a-digest").is_err());
    }

    #[test]
    fn display_is_bare_hex() {
        let value = TriggerValue::parse(EMPTY_SHA1, HashAlgorithm::Sha1).unwrap();
        assert_eq!(format!("{}", value), EMPTY_SHA1);
    }
}
