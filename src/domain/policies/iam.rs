//! IAM policy documents
//!
//! Typed allow/deny statements, serialized to the provider's JSON only at
//! the boundary. Builders cover the two Lambda roles of the stack.

use serde::{Deserialize, Serialize};

/// Policy language version every document declares
pub const POLICY_VERSION: &str = "2012-10-17";

/// A value the provider accepts either bare or as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn values(&self) -> Vec<&str> {
        match self {
            OneOrMany::One(v) => vec![v.as_str()],
            OneOrMany::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(v: &str) -> Self {
        OneOrMany::One(v.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(v: String) -> Self {
        OneOrMany::One(v)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(vs: Vec<&str>) -> Self {
        OneOrMany::Many(vs.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "Service")]
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    pub effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    pub action: OneOrMany,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<OneOrMany>,
}

impl Statement {
    pub fn allow(action: impl Into<OneOrMany>) -> Self {
        Self {
            sid: None,
            effect: Effect::Allow,
            principal: None,
            action: action.into(),
            resource: None,
        }
    }

    pub fn deny(action: impl Into<OneOrMany>) -> Self {
        Self {
            effect: Effect::Deny,
            ..Self::allow(action)
        }
    }

    pub fn on(mut self, resource: impl Into<OneOrMany>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn for_service(mut self, service: impl Into<String>) -> Self {
        self.principal = Some(Principal {
            service: service.into(),
        });
        self
    }

    pub fn sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    pub fn new(statement: Vec<Statement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Trust policy letting Lambda assume a role
    pub fn lambda_assume_role() -> Self {
        Self::new(vec![Statement::allow("sts:AssumeRole")
            .for_service("lambda.amazonaws.com")
            .sid("")])
    }

    /// Inline policy of the API Lambda role
    pub fn api_lambda_inline(targets: &ApiLambdaPolicyTargets) -> Self {
        Self::new(vec![
            Statement::allow(vec!["s3:ListBucket"]).on(bucket_arn(&targets.bucket)),
            Statement::allow(vec!["s3:PutObject", "s3:GetObject", "s3:DeleteObject"])
                .on(bucket_objects_arn(&targets.bucket)),
            Statement::allow(vec!["s3-object-lambda:GetObject"])
                .on(targets.object_lambda_access_point_arn.as_str()),
            Statement::allow(vec!["lambda:InvokeFunction"])
                .on(targets.object_lambda_function_arn.as_str()),
            Statement::allow(vec!["s3:GetObject"])
                .on(format!("{}/*", targets.access_point_arn)),
        ])
    }
}

/// ARNs the API Lambda needs to reach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLambdaPolicyTargets {
    pub bucket: String,
    pub access_point_arn: String,
    pub object_lambda_access_point_arn: String,
    pub object_lambda_function_arn: String,
}

/// Managed policy attached to the object transform Lambda role
pub const OBJECT_LAMBDA_EXECUTION_POLICY: &str =
    "arn:aws:iam::aws:policy/service-role/AmazonS3ObjectLambdaExecutionRolePolicy";

/// Managed policy attached to the API Lambda role
pub const BASIC_EXECUTION_POLICY: &str =
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";

pub fn bucket_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{}", bucket)
}

pub fn bucket_objects_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{}/*", bucket)
}
