//! Domain Policies
//!
//! Access rules of the stack, modeled as data.

pub mod iam;

pub use iam::{ApiLambdaPolicyTargets, Effect, OneOrMany, PolicyDocument, Statement};
