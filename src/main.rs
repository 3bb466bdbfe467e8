//! apigw-trigger CLI
//!
//! Usage: apigw-trigger <COMMAND>
//!
//! Commands:
//!   hash    Compute the trigger value of an identifier list
//!   plan    Compute an API surface's deployment trigger and decide on redeployment
//!   policy  Print an IAM policy document
//!   config  Show the resolved configuration

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apigw_trigger::config::{self, LoadedConfig};
use apigw_trigger::presentation::{output, Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = config::resolve(cli.config.as_deref(), &cwd)?;

    run(cli, loaded)
}

/// `RUST_LOG` wins; otherwise `-v` raises the level step by step
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("apigw_trigger={}", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, loaded: LoadedConfig) -> Result<()> {
    let json = cli.json;
    let verbose = cli.verbose;

    if json {
        for w in &loaded.warnings {
            output::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }))?;
        }
    } else {
        output::print_config_warnings(&loaded.warnings);
    }

    match cli.command {
        Commands::Hash {
            ids,
            stdin,
            algorithm,
        } => commands::hash::cmd_hash(ids, stdin, algorithm, &loaded.config, json),
        Commands::Plan {
            surface,
            source,
            algorithm,
            previous,
            detailed_exitcode,
        } => commands::plan::cmd_plan(
            commands::plan::PlanArgs {
                surface,
                source,
                algorithm,
                previous,
                detailed_exitcode,
            },
            &loaded.config,
            json,
            verbose,
        ),
        Commands::Policy {
            kind,
            bucket,
            access_point_arn,
            object_lambda_access_point_arn,
            object_lambda_function_arn,
        } => commands::policy::cmd_policy(
            kind,
            commands::policy::TargetArgs {
                bucket,
                access_point_arn,
                object_lambda_access_point_arn,
                object_lambda_function_arn,
            },
            json,
        ),
        Commands::Config => commands::config::cmd_config(&loaded, json),
    }
}
