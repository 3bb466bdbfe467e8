//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash_algorithm;
mod identifier;
mod trigger_source;
mod trigger_value;

pub use hash_algorithm::HashAlgorithm;
pub use identifier::{Identifier, IdentifierSet};
pub use trigger_source::TriggerSource;
pub use trigger_value::TriggerValue;
