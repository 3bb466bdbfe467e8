//! Plan Result

use serde::Serialize;

use crate::domain::entities::{DeploymentDecision, DeploymentTriggers};
use crate::domain::value_objects::{IdentifierSet, TriggerSource, TriggerValue};

/// Outcome of one planning pass
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    /// Name of the REST API
    pub api_name: String,
    /// Stage the deployment is published to
    pub stage_name: String,
    pub source: TriggerSource,
    /// Identifiers the trigger was computed over, in order
    pub identifiers: IdentifierSet,
    pub trigger: TriggerValue,
    /// Map attached to the deployment resource
    pub triggers: DeploymentTriggers,
    pub decision: DeploymentDecision,
    /// Stage method path with caching enabled, if it exists on the surface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_method: Option<String>,
    /// Non-fatal findings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl PlanResult {
    pub fn requires_new_deployment(&self) -> bool {
        self.decision.requires_new_deployment()
    }
}
