//! Domain Entities
//!
//! - `api_surface` - REST API resources, methods and integrations
//! - `deployment` - trigger map, replacement policy, redeploy decision

mod api_surface;
mod deployment;

pub use api_surface::{
    ApiSurface, ApiSurfaceBuilder, HttpMethod, Integration, Method, Resource, INTEGRATION_TYPE,
    METHOD_TYPE, RESOURCE_TYPE,
};
pub use deployment::{DeploymentDecision, DeploymentTriggers, ReplacementPolicy, REDEPLOYMENT_KEY};
