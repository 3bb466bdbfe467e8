//! Application Layer
//!
//! Use cases that orchestrate the domain. No business rules live here.
//!
//! ## Use Cases
//!
//! - `PlanUseCase` - one planning pass: surface, identifiers, trigger, decision

pub mod plan;

pub use plan::{PlanOptions, PlanResult, PlanUseCase};
