//! Deployment snapshot entities
//!
//! The trigger map attached to a deployment resource, the replacement policy
//! that applies when it changes, and the decision derived from comparing a
//! recorded trigger with the current one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::TriggerValue;

/// Trigger key the deployment resource watches
pub const REDEPLOYMENT_KEY: &str = "redeployment";

/// Name → value map attached as the deployment's `triggers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeploymentTriggers(BTreeMap<String, String>);

impl DeploymentTriggers {
    /// Trigger map with only the `redeployment` entry
    pub fn redeployment(value: &TriggerValue) -> Self {
        let mut map = BTreeMap::new();
        map.insert(REDEPLOYMENT_KEY.to_string(), value.to_string());
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// How a stale deployment is swapped out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementPolicy {
    /// New snapshot first, then tear down the old one
    #[default]
    CreateBeforeDestroy,
}

impl ReplacementPolicy {
    pub fn create_before_destroy(self) -> bool {
        matches!(self, ReplacementPolicy::CreateBeforeDestroy)
    }
}

/// Outcome of one planning pass for the deployment resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DeploymentDecision {
    /// No trigger recorded yet
    Create { policy: ReplacementPolicy },
    /// Recorded trigger still matches
    Keep,
    /// Recorded trigger differs; a new snapshot replaces the old one
    Replace {
        policy: ReplacementPolicy,
        previous: String,
    },
}

impl DeploymentDecision {
    pub fn decide(previous: Option<&TriggerValue>, current: &TriggerValue) -> Self {
        match previous {
            None => DeploymentDecision::Create {
                policy: ReplacementPolicy::default(),
            },
            Some(prev) if prev.as_str() == current.as_str() => DeploymentDecision::Keep,
            Some(prev) => DeploymentDecision::Replace {
                policy: ReplacementPolicy::default(),
                previous: prev.to_string(),
            },
        }
    }

    /// Whether a new deployment snapshot has to be created
    pub fn requires_new_deployment(&self) -> bool {
        !matches!(self, DeploymentDecision::Keep)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeploymentDecision::Create { .. } => "create",
            DeploymentDecision::Keep => "keep",
            DeploymentDecision::Replace { .. } => "replace",
        }
    }
}
