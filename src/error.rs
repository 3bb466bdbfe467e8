//! Error types for apigw-trigger
//!
//! Uses `thiserror` for library errors. The trigger calculator itself never
//! fails; every variant here belongs to the layers around it (manifests,
//! configuration, operator input).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apigw-trigger operations
pub type TriggerResult<T> = Result<T, TriggerError>;

/// Main error type for apigw-trigger operations
#[derive(Error, Debug)]
pub enum TriggerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML document could not be parsed
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// JSON document could not be parsed
    #[error("invalid JSON in {file}: {message}")]
    InvalidJson { file: PathBuf, message: String },

    /// Surface manifest has an extension we do not know how to read
    #[error("unsupported manifest format '{}' (expected .toml or .json)", .path.display())]
    UnsupportedManifest { path: PathBuf },

    /// Explicitly requested config file is missing
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Two surface elements share a name
    #[error("duplicate element name '{name}' in API surface")]
    DuplicateElement { name: String },

    /// A parent or resource reference points nowhere
    #[error("{element} '{name}' references unknown resource '{target}'")]
    UnknownReference {
        element: &'static str,
        name: String,
        target: String,
    },

    /// Resource parents form a loop
    #[error("resource '{name}' is part of a parent cycle")]
    ParentCycle { name: String },

    /// A required field was empty
    #[error("{element} '{name}' has an empty {field}")]
    EmptyField {
        element: &'static str,
        name: String,
        field: &'static str,
    },

    /// HTTP verb outside what API Gateway accepts
    #[error("unsupported HTTP method '{method}' on method '{name}'")]
    UnsupportedHttpMethod { name: String, method: String },

    /// A recorded trigger value that cannot have come from this calculator
    #[error("malformed trigger value '{value}': expected {expected_len} lowercase hex characters for {algorithm}")]
    MalformedTrigger {
        value: String,
        algorithm: &'static str,
        expected_len: usize,
    },
}
