//! Configuration module
//!
//! Everything the stack used to read ad hoc from the process environment
//! (region, environment name, state backend, caching flag) lives in one
//! [`StackConfig`] that is resolved once at startup and passed by reference.

pub mod env_validator;
mod loader;
mod types;

pub use loader::{
    parse_with_warnings, resolve, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_ALGORITHM, ENV_ENABLE_CACHING, ENV_ENVIRONMENT, ENV_LOCK_TABLE, ENV_REGION,
    ENV_SOURCE, ENV_STATE_BUCKET, PROJECT_CONFIG_FILE,
};
pub use types::{CachingConfig, StackConfig, StateConfig, TriggerConfig};
