//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{HashAlgorithm, TriggerSource};
use crate::error::TriggerResult;

use super::loader::{self, ConfigWarning};

/// Remote state backend names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_bucket")]
    pub bucket: String,

    #[serde(default = "default_lock_table")]
    pub lock_table: String,

    #[serde(default = "default_true")]
    pub encrypt: bool,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            bucket: default_state_bucket(),
            lock_table: default_lock_table(),
            encrypt: true,
        }
    }
}

/// Stage caching for the single-item GET route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_method_path")]
    pub method_path: String,

    #[serde(default = "default_ttl")]
    pub ttl_seconds: u32,

    #[serde(default = "default_cluster_size")]
    pub cluster_size: String,

    #[serde(default = "default_burst_limit")]
    pub throttling_burst_limit: u32,

    #[serde(default = "default_rate_limit")]
    pub throttling_rate_limit: f64,
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            method_path: default_method_path(),
            ttl_seconds: default_ttl(),
            cluster_size: default_cluster_size(),
            throttling_burst_limit: default_burst_limit(),
            throttling_rate_limit: default_rate_limit(),
        }
    }
}

/// How the redeployment trigger is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TriggerConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    #[serde(default)]
    pub source: TriggerSource,
}

/// Stack configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Deployment environment, also the stage name (`dev`, `prod`, ...)
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Prefix of the state key; omitted when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub caching: CachingConfig,

    #[serde(default)]
    pub trigger: TriggerConfig,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            region: default_region(),
            project_name: None,
            state: StateConfig::default(),
            caching: CachingConfig::default(),
            trigger: TriggerConfig::default(),
        }
    }
}

impl StackConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TriggerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TriggerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok(), &mut std::io::stderr())
    }

    /// Key of the state object inside the state bucket
    pub fn state_key(&self) -> String {
        match &self.project_name {
            Some(project) => format!("{}/{}/terraform.tfstate", project, self.environment),
            None => format!("{}/terraform.tfstate", self.environment),
        }
    }

    /// Stage name the deployment is published under
    pub fn stage_name(&self) -> &str {
        &self.environment
    }
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_region() -> String {
    "eu-central-1".to_string()
}

fn default_state_bucket() -> String {
    "g4s9-terraform-state-bucket".to_string()
}

fn default_lock_table() -> String {
    "g4s9-terraform-lock-table".to_string()
}

fn default_true() -> bool {
    true
}

fn default_method_path() -> String {
    "phonenumbers/{id}/GET".to_string()
}

fn default_ttl() -> u32 {
    3600
}

fn default_cluster_size() -> String {
    "0.5".to_string()
}

fn default_burst_limit() -> u32 {
    5
}

fn default_rate_limit() -> f64 {
    10.0
}
