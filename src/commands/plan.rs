use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use apigw_trigger::application::PlanOptions;
use apigw_trigger::config::StackConfig;
use apigw_trigger::domain::value_objects::{HashAlgorithm, TriggerSource, TriggerValue};
use apigw_trigger::presentation::{create_plan_use_case, output};

/// Exit code signalling that a new deployment is required
const EXIT_REDEPLOY: i32 = 2;

pub struct PlanArgs {
    pub surface: Option<PathBuf>,
    pub source: Option<TriggerSource>,
    pub algorithm: Option<HashAlgorithm>,
    pub previous: Option<String>,
    pub detailed_exitcode: bool,
}

pub fn cmd_plan(args: PlanArgs, config: &StackConfig, json: bool, verbose: u8) -> Result<()> {
    let mut options = PlanOptions::from_config(config);
    if let Some(source) = args.source {
        options.source = source;
    }
    if let Some(algorithm) = args.algorithm {
        options.algorithm = algorithm;
    }
    if let Some(previous) = &args.previous {
        let previous =
            TriggerValue::parse_any(previous).context("Invalid --previous trigger value")?;
        options = options.with_previous(previous);
    }

    let surface_label = args
        .surface
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());
    let result = create_plan_use_case(args.surface)
        .execute(&options)
        .with_context(|| format!("Failed to plan deployment for surface '{}'", surface_label))?;

    if json {
        output::emit(output::plan_event(&result))?;
    } else {
        output::render_plan(&mut io::stdout().lock(), &result, verbose)?;
    }

    if args.detailed_exitcode && result.requires_new_deployment() {
        io::stdout().flush()?;
        std::process::exit(EXIT_REDEPLOY);
    }
    Ok(())
}
