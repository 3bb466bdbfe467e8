//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::PathBuf;

use crate::application::PlanUseCase;
use crate::domain::entities::ApiSurface;
use crate::domain::ports::SurfaceSource;
use crate::error::TriggerResult;
use crate::infrastructure::{BuiltinSurface, ManifestSurface};

/// Surface source selected on the command line
#[derive(Debug, Clone)]
pub enum ConfiguredSurface {
    Builtin(BuiltinSurface),
    Manifest(ManifestSurface),
}

impl ConfiguredSurface {
    /// Manifest when a path is given, otherwise the built-in surface
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfiguredSurface::Manifest(ManifestSurface::new(path)),
            None => ConfiguredSurface::Builtin(BuiltinSurface::default()),
        }
    }
}

impl SurfaceSource for ConfiguredSurface {
    fn describe(&self) -> String {
        match self {
            ConfiguredSurface::Builtin(s) => s.describe(),
            ConfiguredSurface::Manifest(s) => s.describe(),
        }
    }

    fn load(&self) -> TriggerResult<ApiSurface> {
        match self {
            ConfiguredSurface::Builtin(s) => s.load(),
            ConfiguredSurface::Manifest(s) => s.load(),
        }
    }
}

/// Type alias for the concrete PlanUseCase
pub type ConcretePlanUseCase = PlanUseCase<ConfiguredSurface>;

/// Create a plan use case reading `surface`, or the built-in surface
pub fn create_plan_use_case(surface: Option<PathBuf>) -> ConcretePlanUseCase {
    PlanUseCase::new(ConfiguredSurface::from_path(surface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_uses_builtin_surface() {
        let source = ConfiguredSurface::from_path(None);
        assert!(matches!(source, ConfiguredSurface::Builtin(_)));
        assert_eq!(source.load().unwrap().name(), "PhoneNumberAPI");
    }

    #[test]
    fn path_uses_manifest() {
        let source = ConfiguredSurface::from_path(Some(PathBuf::from("missing.toml")));
        assert!(source.describe().contains("missing.toml"));
        assert!(source.load().is_err());
    }
}
