//! Identifier lists from text input
//!
//! Two shapes are accepted: a JSON array of strings, or one identifier per
//! line. Blank lines are skipped in line mode; use the JSON form to pass
//! empty or multi-line identifiers.

use std::io::Read;
use std::path::Path;

use crate::domain::value_objects::IdentifierSet;
use crate::error::{TriggerError, TriggerResult};

/// Parse identifiers from `text`; `origin` names the source in errors
pub fn parse_identifiers(text: &str, origin: &Path) -> TriggerResult<IdentifierSet> {
    if text.trim_start().starts_with('[') {
        let values: Vec<String> =
            serde_json::from_str(text).map_err(|e| TriggerError::InvalidJson {
                file: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        return Ok(values.into_iter().collect());
    }

    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect())
}

/// Read all of `reader` and parse it as an identifier list
pub fn read_identifiers<R: Read>(mut reader: R, origin: &Path) -> TriggerResult<IdentifierSet> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_identifiers(&text, origin)
}
