//! Plan Use Case
//!
//! One planning pass for the deployment resource:
//! 1. Load the API surface
//! 2. Build its identifier set
//! 3. Compute the redeployment trigger
//! 4. Compare against the recorded trigger
//!
//! Pure orchestration; the rules live in the domain.

use crate::domain::entities::{DeploymentDecision, DeploymentTriggers};
use crate::domain::ports::SurfaceSource;
use crate::domain::services::TriggerCalculator;
use crate::error::TriggerResult;

use super::options::PlanOptions;
use super::result::PlanResult;

/// Plan use case, parameterized by where the surface comes from
pub struct PlanUseCase<S>
where
    S: SurfaceSource,
{
    surface_source: S,
}

impl<S> PlanUseCase<S>
where
    S: SurfaceSource,
{
    pub fn new(surface_source: S) -> Self {
        Self { surface_source }
    }

    pub fn execute(&self, options: &PlanOptions) -> TriggerResult<PlanResult> {
        let surface = self.surface_source.load()?;
        tracing::info!(
            surface = %self.surface_source.describe(),
            api = surface.name(),
            source = %options.source,
            algorithm = %options.algorithm,
            "planning deployment"
        );

        let identifiers = surface.identifier_set(options.source);
        let trigger = TriggerCalculator::new(options.algorithm).compute(&identifiers);
        let decision = DeploymentDecision::decide(options.previous.as_ref(), &trigger);
        tracing::debug!(
            identifiers = identifiers.len(),
            trigger = %trigger,
            decision = decision.label(),
            "computed redeployment trigger"
        );

        let mut warnings = Vec::new();
        let cached_method = match &options.cache_method_path {
            Some(path) => {
                let exists = surface
                    .methods()
                    .iter()
                    .any(|m| surface.method_path(m).as_deref() == Some(path.as_str()));
                if exists {
                    Some(path.clone())
                } else {
                    let message = format!("caching method path '{}' matches no method", path);
                    tracing::warn!("{}", message);
                    warnings.push(message);
                    None
                }
            }
            None => None,
        };

        Ok(PlanResult {
            api_name: surface.name().to_string(),
            stage_name: options.stage_name.clone(),
            source: options.source,
            triggers: DeploymentTriggers::redeployment(&trigger),
            identifiers,
            trigger,
            decision,
            cached_method,
            warnings,
        })
    }
}
