//! Output Rendering
//!
//! Text output for humans, NDJSON events for CI.

use std::io::{self, Write};
use std::path::Path;

use crate::application::PlanResult;
use crate::config::{ConfigWarning, StackConfig};
use crate::domain::entities::DeploymentDecision;
use crate::domain::value_objects::{IdentifierSet, TriggerValue};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn hash_event(ids: &IdentifierSet, trigger: &TriggerValue) -> serde_json::Value {
    serde_json::json!({
        "event": "trigger",
        "command": "hash",
        "algorithm": trigger.algorithm(),
        "identifiers": ids.len(),
        "trigger": trigger.as_str(),
    })
}

pub fn plan_event(result: &PlanResult) -> serde_json::Value {
    serde_json::json!({
        "event": "plan",
        "command": "plan",
        "requires_new_deployment": result.requires_new_deployment(),
        "data": result,
    })
}

pub fn config_event(config: &StackConfig, source: Option<&Path>) -> serde_json::Value {
    serde_json::json!({
        "event": "config",
        "command": "config",
        "source": source.map(|p| p.display().to_string()),
        "state_key": config.state_key(),
        "data": config,
    })
}

/// Human-readable plan summary
pub fn render_plan(out: &mut impl Write, result: &PlanResult, verbose: u8) -> io::Result<()> {
    writeln!(out, "API:       {}", result.api_name)?;
    writeln!(out, "Stage:     {}", result.stage_name)?;
    writeln!(
        out,
        "Trigger:   {} ({}, {} identifiers)",
        result.trigger,
        result.source,
        result.identifiers.len()
    )?;

    if verbose > 0 {
        for id in &result.identifiers {
            writeln!(out, "  - {}", id)?;
        }
    }

    match &result.decision {
        DeploymentDecision::Create { .. } => {
            writeln!(out, "Decision:  create (no recorded trigger)")?;
        }
        DeploymentDecision::Keep => {
            writeln!(out, "Decision:  keep (trigger unchanged)")?;
        }
        DeploymentDecision::Replace { previous, .. } => {
            writeln!(out, "Decision:  replace (was {})", previous)?;
            writeln!(out, "           create before destroy")?;
        }
    }

    if let Some(path) = &result.cached_method {
        writeln!(out, "Caching:   {}", path)?;
    }
    for warning in &result.warnings {
        writeln!(out, "⚠ {}", warning)?;
    }
    Ok(())
}

/// Human-readable configuration listing
pub fn render_config(
    out: &mut impl Write,
    config: &StackConfig,
    source: Option<&Path>,
) -> io::Result<()> {
    match source {
        Some(path) => writeln!(out, "Config file: {}", path.display())?,
        None => writeln!(out, "Config file: (none, defaults)")?,
    }
    writeln!(out)?;
    writeln!(out, "environment = {}", config.environment)?;
    writeln!(out, "region      = {}", config.region)?;
    if let Some(project) = &config.project_name {
        writeln!(out, "project     = {}", project)?;
    }
    writeln!(
        out,
        "state       = s3://{}/{} ({})",
        config.state.bucket,
        config.state_key(),
        if config.state.encrypt { "encrypted" } else { "unencrypted" }
    )?;
    writeln!(out, "lock table  = {}", config.state.lock_table)?;
    let caching = &config.caching;
    if caching.enabled {
        writeln!(
            out,
            "caching     = {} (ttl {}s, cluster {} GB)",
            caching.method_path, caching.ttl_seconds, caching.cluster_size
        )?;
        writeln!(
            out,
            "throttling  = burst {}, rate {}/s",
            caching.throttling_burst_limit, caching.throttling_rate_limit
        )?;
    } else {
        writeln!(out, "caching     = disabled")?;
    }
    writeln!(out, "algorithm   = {}", config.trigger.algorithm)?;
    writeln!(out, "source      = {}", config.trigger.source)?;
    Ok(())
}
