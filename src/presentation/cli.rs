//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::value_objects::{HashAlgorithm, TriggerSource};

/// apigw-trigger - redeployment triggers for API Gateway deployments
#[derive(Parser, Debug)]
#[command(name = "apigw-trigger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON event per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./apigw-trigger.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the trigger value of an identifier list
    Hash {
        /// Identifiers, in order
        #[arg(value_name = "ID")]
        ids: Vec<String>,

        /// Read identifiers from stdin (JSON array or one per line)
        #[arg(long, conflicts_with = "ids")]
        stdin: bool,

        /// Hash algorithm (default from config)
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,
    },

    /// Compute the deployment trigger of an API surface and decide on redeployment
    Plan {
        /// Surface manifest (TOML or JSON); the built-in phone numbers API when omitted
        #[arg(short, long, value_name = "PATH")]
        surface: Option<PathBuf>,

        /// What the identifier set is built from (default from config)
        #[arg(long)]
        source: Option<TriggerSource>,

        /// Hash algorithm (default from config)
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,

        /// Trigger value recorded by the previous deployment
        #[arg(long, value_name = "HEX")]
        previous: Option<String>,

        /// Exit with code 2 when a new deployment is required
        #[arg(long)]
        detailed_exitcode: bool,
    },

    /// Print an IAM policy document
    Policy {
        #[arg(value_enum)]
        kind: PolicyKind,

        /// Data bucket name (api-lambda)
        #[arg(long, required_if_eq("kind", "api-lambda"))]
        bucket: Option<String>,

        /// S3 access point ARN (api-lambda)
        #[arg(long, required_if_eq("kind", "api-lambda"))]
        access_point_arn: Option<String>,

        /// S3 Object Lambda access point ARN (api-lambda)
        #[arg(long, required_if_eq("kind", "api-lambda"))]
        object_lambda_access_point_arn: Option<String>,

        /// ARN of the function behind the Object Lambda access point (api-lambda)
        #[arg(long, required_if_eq("kind", "api-lambda"))]
        object_lambda_function_arn: Option<String>,
    },

    /// Show the resolved configuration
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Trust policy letting Lambda assume the execution role
    AssumeRole,
    /// Inline policy of the API function role
    ApiLambda,
}
