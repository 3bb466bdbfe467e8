//! Trigger Source Value Object
//!
//! Chooses what the identifier set of an API surface is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where identifiers for the trigger come from
///
/// - `Handles`: the provisioning handle of every element (default). Any
///   handle churn produces a new trigger, even for an unchanged surface.
/// - `Semantic`: a rendering of what each element declares (path, verb,
///   integration target). Stable across handle churn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TriggerSource {
    #[default]
    Handles,
    Semantic,
}

impl TriggerSource {
    pub const NAMES: &'static [&'static str] = &["handles", "semantic"];

    pub fn name(self) -> &'static str {
        match self {
            TriggerSource::Handles => "handles",
            TriggerSource::Semantic => "semantic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "handles" | "handle" => Some(TriggerSource::Handles),
            "semantic" => Some(TriggerSource::Semantic),
            _ => None,
        }
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TriggerSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown trigger source '{}' (valid: {})",
                s,
                Self::NAMES.join(", ")
            )
        })
    }
}
