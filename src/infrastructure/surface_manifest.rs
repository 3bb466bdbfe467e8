//! API surface manifests
//!
//! Reads an [`ApiSurface`] from a TOML or JSON file. The manifest mirrors the
//! declaration layer: resources, then methods with an optional integration.
//!
//! ```toml
//! name = "PhoneNumberAPI"
//!
//! [[resources]]
//! name = "PhoneNumbersResource"
//! path_part = "phonenumbers"
//!
//! [[methods]]
//! name = "PhoneNumbersGet"
//! resource = "PhoneNumbersResource"
//! http_method = "GET"
//!
//! [methods.integration]
//! name = "PhoneNumbersGetIntegration"
//! uri = "${aws_lambda_function.ApiLambdaFunction.invoke_arn}"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ApiSurface, HttpMethod, Integration, Method, Resource};
use crate::error::{TriggerError, TriggerResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceManifest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub path_part: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    pub resource: String,
    pub http_method: String,
    #[serde(default = "default_authorization")]
    pub authorization: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub integration: Option<IntegrationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationEntry {
    pub name: String,
    #[serde(rename = "type", default = "default_integration_type")]
    pub integration_type: String,
    #[serde(default = "default_integration_method")]
    pub integration_http_method: String,
    pub uri: String,
    #[serde(default)]
    pub handle: Option<String>,
}

fn default_authorization() -> String {
    "NONE".to_string()
}

fn default_integration_type() -> String {
    "AWS_PROXY".to_string()
}

fn default_integration_method() -> String {
    "POST".to_string()
}

impl SurfaceManifest {
    /// Read a manifest, picking the format from the file extension
    pub fn load(path: &Path) -> TriggerResult<Self> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml(&content, path),
            Some("json") => Self::from_json(&content, path),
            _ => Err(TriggerError::UnsupportedManifest {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_toml(content: &str, path: &Path) -> TriggerResult<Self> {
        toml::from_str(content).map_err(|e| TriggerError::InvalidToml {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json(content: &str, path: &Path) -> TriggerResult<Self> {
        serde_json::from_str(content).map_err(|e| TriggerError::InvalidJson {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate and convert into a domain surface
    pub fn into_surface(self) -> TriggerResult<ApiSurface> {
        let mut builder = ApiSurface::builder(self.name);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        for entry in self.resources {
            let mut resource = Resource::new(entry.name, entry.path_part);
            if let Some(parent) = entry.parent {
                resource = resource.with_parent(parent);
            }
            if let Some(handle) = entry.handle {
                resource = resource.with_handle(handle);
            }
            builder = builder.resource(resource);
        }

        for entry in self.methods {
            let http_method = parse_method(&entry.name, &entry.http_method)?;
            let mut method = Method::new(entry.name, entry.resource, http_method)
                .with_authorization(entry.authorization);
            if let Some(handle) = entry.handle {
                method = method.with_handle(handle);
            }
            if let Some(int) = entry.integration {
                let int_method = parse_method(&int.name, &int.integration_http_method)?;
                let mut integration =
                    Integration::new(int.name, int.integration_type, int_method, int.uri);
                if let Some(handle) = int.handle {
                    integration = integration.with_handle(handle);
                }
                method = method.with_integration(integration);
            }
            builder = builder.method(method);
        }

        builder.build()
    }
}

fn parse_method(name: &str, raw: &str) -> TriggerResult<HttpMethod> {
    HttpMethod::parse(raw).ok_or_else(|| TriggerError::UnsupportedHttpMethod {
        name: name.to_string(),
        method: raw.to_string(),
    })
}

/// Load and validate a surface manifest in one step
pub fn load_surface(path: &Path) -> TriggerResult<ApiSurface> {
    let surface = SurfaceManifest::load(path)?.into_surface()?;
    tracing::debug!(
        path = %path.display(),
        name = surface.name(),
        elements = surface.element_count(),
        "loaded API surface"
    );
    Ok(surface)
}
