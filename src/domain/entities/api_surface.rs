//! API Surface entity
//!
//! The REST API whose shape decides when a deployment snapshot is stale:
//! path resources, method bindings on them, and the backend integration of
//! each method. An [`ApiSurface`] is validated on construction, so every
//! reference inside it resolves and resource parents never loop.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::services::canonical;
use crate::domain::value_objects::{Identifier, IdentifierSet, TriggerSource};
use crate::error::{TriggerError, TriggerResult};

pub const RESOURCE_TYPE: &str = "aws_api_gateway_resource";
pub const METHOD_TYPE: &str = "aws_api_gateway_method";
pub const INTEGRATION_TYPE: &str = "aws_api_gateway_integration";

/// HTTP verbs accepted by API Gateway method bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Any,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Any => "ANY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            "ANY" => Some(HttpMethod::Any),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported HTTP method '{}'", s))
    }
}

/// A path segment under the API root or under another resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    path_part: String,
    parent: Option<String>,
    handle: Option<Identifier>,
}

impl Resource {
    pub fn new(name: impl Into<String>, path_part: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_part: path_part.into(),
            parent: None,
            handle: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_handle(mut self, handle: impl Into<Identifier>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_part(&self) -> &str {
        &self.path_part
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Explicit handle, or the Terraform reference to this resource
    pub fn handle(&self) -> Identifier {
        self.handle
            .clone()
            .unwrap_or_else(|| Identifier::terraform_ref(RESOURCE_TYPE, &self.name))
    }
}

/// Backend wiring of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    name: String,
    integration_type: String,
    integration_http_method: HttpMethod,
    uri: String,
    handle: Option<Identifier>,
}

impl Integration {
    /// Lambda proxy integration (`AWS_PROXY`, invoked with POST)
    pub fn lambda_proxy(name: impl Into<String>, invoke_arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            integration_type: "AWS_PROXY".to_string(),
            integration_http_method: HttpMethod::Post,
            uri: invoke_arn.into(),
            handle: None,
        }
    }

    pub fn new(
        name: impl Into<String>,
        integration_type: impl Into<String>,
        integration_http_method: HttpMethod,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            integration_type: integration_type.into(),
            integration_http_method,
            uri: uri.into(),
            handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<Identifier>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn integration_type(&self) -> &str {
        &self.integration_type
    }

    pub fn integration_http_method(&self) -> HttpMethod {
        self.integration_http_method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn handle(&self) -> Identifier {
        self.handle
            .clone()
            .unwrap_or_else(|| Identifier::terraform_ref(INTEGRATION_TYPE, &self.name))
    }
}

/// An HTTP verb bound to a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    resource: String,
    http_method: HttpMethod,
    authorization: String,
    handle: Option<Identifier>,
    integration: Option<Integration>,
}

impl Method {
    pub fn new(name: impl Into<String>, resource: impl Into<String>, http_method: HttpMethod) -> Self {
        Self {
            name: name.into(),
            resource: resource.into(),
            http_method,
            authorization: "NONE".to_string(),
            handle: None,
            integration: None,
        }
    }

    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = authorization.into();
        self
    }

    pub fn with_handle(mut self, handle: impl Into<Identifier>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn with_integration(mut self, integration: Integration) -> Self {
        self.integration = Some(integration);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn integration(&self) -> Option<&Integration> {
        self.integration.as_ref()
    }

    pub fn handle(&self) -> Identifier {
        self.handle
            .clone()
            .unwrap_or_else(|| Identifier::terraform_ref(METHOD_TYPE, &self.name))
    }
}

/// Validated REST API surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSurface {
    name: String,
    description: Option<String>,
    resources: Vec<Resource>,
    methods: Vec<Method>,
    index: BTreeMap<String, usize>,
}

impl ApiSurface {
    pub fn builder(name: impl Into<String>) -> ApiSurfaceBuilder {
        ApiSurfaceBuilder {
            name: name.into(),
            description: None,
            resources: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// The phone number API: `/phonenumbers` (GET, POST) and
    /// `/phonenumbers/{id}` (GET, DELETE), all proxied to one Lambda.
    pub fn phone_numbers(invoke_arn: &str) -> TriggerResult<Self> {
        Self::builder("PhoneNumberAPI")
            .description("API for managing phone numbers")
            .resource(Resource::new("PhoneNumbersResource", "phonenumbers"))
            .resource(
                Resource::new("PhoneNumberByIdResource", "{id}").with_parent("PhoneNumbersResource"),
            )
            .method(
                Method::new("PhoneNumbersGet", "PhoneNumbersResource", HttpMethod::Get)
                    .with_integration(Integration::lambda_proxy(
                        "PhoneNumbersGetIntegration",
                        invoke_arn,
                    )),
            )
            .method(
                Method::new("PhoneNumbersPost", "PhoneNumbersResource", HttpMethod::Post)
                    .with_integration(Integration::lambda_proxy(
                        "PhoneNumbersPostIntegration",
                        invoke_arn,
                    )),
            )
            .method(
                Method::new("PhoneNumberGetById", "PhoneNumberByIdResource", HttpMethod::Get)
                    .with_integration(Integration::lambda_proxy(
                        "PhoneNumberGetByIdIntegration",
                        invoke_arn,
                    )),
            )
            .method(
                Method::new(
                    "PhoneNumberDeleteById",
                    "PhoneNumberByIdResource",
                    HttpMethod::Delete,
                )
                .with_integration(Integration::lambda_proxy(
                    "PhoneNumberDeleteByIdIntegration",
                    invoke_arn,
                )),
            )
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.index.get(name).map(|&i| &self.resources[i])
    }

    /// Number of tracked elements (resources, methods, integrations)
    pub fn element_count(&self) -> usize {
        self.resources.len()
            + self.methods.len()
            + self.methods.iter().filter(|m| m.integration.is_some()).count()
    }

    /// Full path of a resource from the API root, e.g. `/phonenumbers/{id}`
    pub fn full_path(&self, resource: &str) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = self.resource(resource)?;
        loop {
            parts.push(current.path_part.as_str());
            match current.parent.as_deref() {
                Some(parent) => current = self.resource(parent)?,
                None => break,
            }
        }
        parts.reverse();
        Some(format!("/{}", parts.join("/")))
    }

    /// Stage method path used by method settings, e.g. `phonenumbers/{id}/GET`
    pub fn method_path(&self, method: &Method) -> Option<String> {
        let path = self.full_path(&method.resource)?;
        Some(format!(
            "{}/{}",
            path.trim_start_matches('/'),
            method.http_method
        ))
    }

    /// Ordered identifiers fed into the trigger calculator.
    ///
    /// Resources first in declaration order, then each method followed by
    /// its integration.
    pub fn identifier_set(&self, source: TriggerSource) -> IdentifierSet {
        match source {
            TriggerSource::Handles => self.handle_identifiers(),
            TriggerSource::Semantic => self.semantic_identifiers(),
        }
    }

    fn handle_identifiers(&self) -> IdentifierSet {
        let mut ids = IdentifierSet::new();
        for resource in &self.resources {
            ids.push(resource.handle());
        }
        for method in &self.methods {
            ids.push(method.handle());
            if let Some(integration) = &method.integration {
                ids.push(integration.handle());
            }
        }
        ids
    }

    /// One identifier per element: its declared fields as a JSON array, so
    /// a space inside a field cannot shift a field boundary.
    fn semantic_identifiers(&self) -> IdentifierSet {
        let mut ids = IdentifierSet::new();
        for resource in &self.resources {
            let path = self.full_path(&resource.name).unwrap_or_default();
            ids.push(canonical::encode_strs(["resource", path.as_str()]));
        }
        for method in &self.methods {
            let path = self.full_path(&method.resource).unwrap_or_default();
            let verb = method.http_method.as_str();
            ids.push(canonical::encode_strs([
                "method",
                verb,
                path.as_str(),
                method.authorization.as_str(),
            ]));
            if let Some(integration) = &method.integration {
                ids.push(canonical::encode_strs([
                    "integration",
                    verb,
                    path.as_str(),
                    integration.integration_type.as_str(),
                    integration.integration_http_method.as_str(),
                    integration.uri.as_str(),
                ]));
            }
        }
        ids
    }
}

/// Collects surface elements and validates them in [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct ApiSurfaceBuilder {
    name: String,
    description: Option<String>,
    resources: Vec<Resource>,
    methods: Vec<Method>,
}

impl ApiSurfaceBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(self) -> TriggerResult<ApiSurface> {
        let mut seen = BTreeSet::new();
        let mut claim = |element: &'static str, name: &str| -> TriggerResult<()> {
            if name.trim().is_empty() {
                return Err(TriggerError::EmptyField {
                    element,
                    name: name.to_string(),
                    field: "name",
                });
            }
            if !seen.insert(name.to_string()) {
                return Err(TriggerError::DuplicateElement {
                    name: name.to_string(),
                });
            }
            Ok(())
        };

        let mut index = BTreeMap::new();
        for (i, resource) in self.resources.iter().enumerate() {
            claim("resource", &resource.name)?;
            if resource.path_part.is_empty() {
                return Err(TriggerError::EmptyField {
                    element: "resource",
                    name: resource.name.clone(),
                    field: "path_part",
                });
            }
            index.insert(resource.name.clone(), i);
        }

        for method in &self.methods {
            claim("method", &method.name)?;
            if !index.contains_key(&method.resource) {
                return Err(TriggerError::UnknownReference {
                    element: "method",
                    name: method.name.clone(),
                    target: method.resource.clone(),
                });
            }
            if let Some(integration) = &method.integration {
                claim("integration", &integration.name)?;
                if integration.uri.trim().is_empty() {
                    return Err(TriggerError::EmptyField {
                        element: "integration",
                        name: integration.name.clone(),
                        field: "uri",
                    });
                }
            }
        }

        for resource in &self.resources {
            if let Some(parent) = &resource.parent {
                if !index.contains_key(parent) {
                    return Err(TriggerError::UnknownReference {
                        element: "resource",
                        name: resource.name.clone(),
                        target: parent.clone(),
                    });
                }
            }
        }
        check_acyclic(&self.resources, &index)?;

        Ok(ApiSurface {
            name: self.name,
            description: self.description,
            resources: self.resources,
            methods: self.methods,
            index,
        })
    }
}

fn check_acyclic(resources: &[Resource], index: &BTreeMap<String, usize>) -> TriggerResult<()> {
    for start in resources {
        let mut current = start;
        // A chain longer than the resource count must revisit a node.
        // Once it has, `current` sits on the cycle itself.
        for _ in 0..=resources.len() {
            match current.parent.as_ref().and_then(|p| index.get(p)) {
                Some(&i) => current = &resources[i],
                None => break,
            }
        }
        if current.parent.is_some() {
            return Err(TriggerError::ParentCycle {
                name: current.name.clone(),
            });
        }
    }
    Ok(())
}
