//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies
//! - `output` - Text and NDJSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, PolicyKind};
pub use factory::create_plan_use_case;
