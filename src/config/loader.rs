//! Configuration loading
//!
//! Resolution order, highest priority first:
//! 1. CLI flags (applied by the caller)
//! 2. Environment variables
//! 3. Explicit `--config` file, else `./apigw-trigger.toml`, else the user
//!    config `<config_dir>/apigw-trigger/config.toml`
//! 4. Built-in defaults

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{HashAlgorithm, TriggerSource};
use crate::error::{TriggerError, TriggerResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::StackConfig;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "apigw-trigger.toml";

pub const ENV_ENVIRONMENT: &str = "ENV";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_STATE_BUCKET: &str = "STATE_BUCKET";
pub const ENV_LOCK_TABLE: &str = "LOCK_TABLE";
pub const ENV_ENABLE_CACHING: &str = "ENABLE_CACHING";
pub const ENV_ALGORITHM: &str = "APIGW_TRIGGER_ALGORITHM";
pub const ENV_SOURCE: &str = "APIGW_TRIGGER_SOURCE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: StackConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TriggerResult<(StackConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> TriggerResult<(StackConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: StackConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TriggerError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the config file, then apply the process environment.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> TriggerResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) if !path.exists() => {
            return Err(TriggerError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => implicit_locations(cwd).into_iter().find(|p| p.exists()),
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (StackConfig::default(), Vec::new())
        }
    };

    for warning in &warnings {
        tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown config key");
    }

    Ok(LoadedConfig {
        config: config.with_env_overrides(),
        source: candidate,
        warnings,
    })
}

fn implicit_locations(cwd: &Path) -> Vec<PathBuf> {
    let mut locations = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("apigw-trigger").join("config.toml"));
    }
    locations
}

/// Apply environment overrides read through `lookup`.
///
/// Warnings about invalid values go to `warn_out`.
pub fn with_env_overrides<L, W>(mut config: StackConfig, lookup: L, warn_out: &mut W) -> StackConfig
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(env) = non_empty(ENV_ENVIRONMENT) {
        config.environment = env;
    }
    if let Some(region) = non_empty(ENV_REGION) {
        config.region = region;
    }
    if let Some(bucket) = non_empty(ENV_STATE_BUCKET) {
        config.state.bucket = bucket;
    }
    if let Some(table) = non_empty(ENV_LOCK_TABLE) {
        config.state.lock_table = table;
    }

    // Any non-empty value turns caching on, "0" and "false" included.
    if non_empty(ENV_ENABLE_CACHING).is_some() {
        config.caching.enabled = true;
    }

    if let Some(value) = non_empty(ENV_ALGORITHM) {
        config.trigger.algorithm = EnvVarValidator::new(ENV_ALGORITHM, HashAlgorithm::NAMES)
            .parse_with_writer(&value, HashAlgorithm::parse, config.trigger.algorithm, warn_out);
    }
    if let Some(value) = non_empty(ENV_SOURCE) {
        config.trigger.source = EnvVarValidator::new(ENV_SOURCE, TriggerSource::NAMES)
            .parse_with_writer(&value, TriggerSource::parse, config.trigger.source, warn_out);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "environment",
    "region",
    "project_name",
    "state",
    "bucket",
    "lock_table",
    "encrypt",
    "caching",
    "enabled",
    "method_path",
    "ttl_seconds",
    "cluster_size",
    "throttling_burst_limit",
    "throttling_rate_limit",
    "trigger",
    "algorithm",
    "source",
];
