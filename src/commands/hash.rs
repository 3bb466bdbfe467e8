use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use apigw_trigger::config::StackConfig;
use apigw_trigger::domain::services::TriggerCalculator;
use apigw_trigger::domain::value_objects::{HashAlgorithm, IdentifierSet};
use apigw_trigger::infrastructure::read_identifiers;
use apigw_trigger::presentation::output;

pub fn cmd_hash(
    ids: Vec<String>,
    stdin: bool,
    algorithm: Option<HashAlgorithm>,
    config: &StackConfig,
    json: bool,
) -> Result<()> {
    let ids: IdentifierSet = if stdin {
        read_identifiers(io::stdin().lock(), Path::new("<stdin>"))
            .context("Failed to read identifiers from stdin")?
    } else {
        ids.into_iter().collect()
    };

    let algorithm = algorithm.unwrap_or(config.trigger.algorithm);
    let trigger = TriggerCalculator::new(algorithm).compute(&ids);
    tracing::debug!(identifiers = ids.len(), %algorithm, "hashed identifier list");

    if json {
        output::emit(output::hash_event(&ids, &trigger))?;
    } else {
        println!("{}", trigger);
    }
    Ok(())
}
