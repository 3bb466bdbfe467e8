//! apigw-trigger - redeployment triggers for API Gateway deployments
//!
//! A deployment snapshot of a REST API only picks up changes when it is
//! replaced. This crate computes a deterministic trigger value over the
//! identifiers of the API's resources, methods and integrations, so that a
//! changed surface yields a changed trigger and a new deployment.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::StackConfig;
pub use domain::entities::{ApiSurface, DeploymentDecision};
pub use domain::services::{compute_trigger, TriggerCalculator};
pub use domain::value_objects::{
    HashAlgorithm, Identifier, IdentifierSet, TriggerSource, TriggerValue,
};
pub use error::{TriggerError, TriggerResult};
