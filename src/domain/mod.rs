//! Domain Layer
//!
//! Pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - API surface and deployment snapshot types
//! - `value_objects/` - Identifier, TriggerValue, HashAlgorithm, TriggerSource
//! - `services/` - canonical encoding and the trigger calculator
//! - `policies/` - IAM policy documents
//! - `ports/` - traits implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
