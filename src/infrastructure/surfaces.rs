//! SurfaceSource implementations

use std::path::PathBuf;

use crate::domain::entities::ApiSurface;
use crate::domain::ports::SurfaceSource;
use crate::error::TriggerResult;

use super::surface_manifest::load_surface;

/// Terraform reference to the API Lambda's invoke ARN
pub const DEFAULT_INVOKE_ARN: &str = "${aws_lambda_function.ApiLambdaFunction.invoke_arn}";

/// The phone number API declared in code
#[derive(Debug, Clone)]
pub struct BuiltinSurface {
    invoke_arn: String,
}

impl BuiltinSurface {
    pub fn new(invoke_arn: impl Into<String>) -> Self {
        Self {
            invoke_arn: invoke_arn.into(),
        }
    }
}

impl Default for BuiltinSurface {
    fn default() -> Self {
        Self::new(DEFAULT_INVOKE_ARN)
    }
}

impl SurfaceSource for BuiltinSurface {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> TriggerResult<ApiSurface> {
        ApiSurface::phone_numbers(&self.invoke_arn)
    }
}

/// A surface read from a TOML or JSON manifest on disk
#[derive(Debug, Clone)]
pub struct ManifestSurface {
    path: PathBuf,
}

impl ManifestSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SurfaceSource for ManifestSurface {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> TriggerResult<ApiSurface> {
        load_surface(&self.path)
    }
}
