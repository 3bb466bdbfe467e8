//! Deployment Trigger Calculator
//!
//! Pure function from an ordered identifier set to a trigger value:
//! canonical encoding, then a one-way hash, rendered as lowercase hex.
//! No I/O, no state; safe to call from any number of threads.

use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::canonical;
use crate::domain::value_objects::{HashAlgorithm, Identifier, IdentifierSet, TriggerValue};

/// Computes trigger values with a fixed hash algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerCalculator {
    algorithm: HashAlgorithm,
}

impl TriggerCalculator {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Fingerprint an identifier set
    pub fn compute(&self, ids: &IdentifierSet) -> TriggerValue {
        compute_trigger(ids.iter(), self.algorithm)
    }

    /// Fingerprint raw strings without building an [`IdentifierSet`] first
    pub fn compute_strs<S: AsRef<str>>(&self, values: &[S]) -> TriggerValue {
        let ids: Vec<Identifier> = values.iter().map(|v| Identifier::new(v.as_ref())).collect();
        compute_trigger(&ids, self.algorithm)
    }
}

/// Hash the canonical encoding of `ids` with `algorithm`
pub fn compute_trigger<'a, I>(ids: I, algorithm: HashAlgorithm) -> TriggerValue
where
    I: IntoIterator<Item = &'a Identifier>,
{
    let encoded = canonical::encode(ids);
    let bytes = encoded.as_bytes();

    match algorithm {
        HashAlgorithm::Sha1 => TriggerValue::from_digest(algorithm, Sha1::digest(bytes)),
        HashAlgorithm::Sha256 => TriggerValue::from_digest(algorithm, Sha256::digest(bytes)),
    }
}
