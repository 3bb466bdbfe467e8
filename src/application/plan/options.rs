//! Plan Options

use crate::config::StackConfig;
use crate::domain::value_objects::{HashAlgorithm, TriggerSource, TriggerValue};

/// Options for one planning pass
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// What the identifier set is built from
    pub source: TriggerSource,
    /// Hash applied to the canonical encoding
    pub algorithm: HashAlgorithm,
    /// Trigger recorded by the previous pass, if any
    pub previous: Option<TriggerValue>,
    /// Stage method path that gets caching, when enabled
    pub cache_method_path: Option<String>,
    /// Stage the deployment is published to
    pub stage_name: String,
}

impl PlanOptions {
    pub fn from_config(config: &StackConfig) -> Self {
        Self {
            source: config.trigger.source,
            algorithm: config.trigger.algorithm,
            previous: None,
            cache_method_path: config
                .caching
                .enabled
                .then(|| config.caching.method_path.clone()),
            stage_name: config.stage_name().to_string(),
        }
    }

    pub fn with_previous(mut self, previous: TriggerValue) -> Self {
        self.previous = Some(previous);
        self
    }
}
