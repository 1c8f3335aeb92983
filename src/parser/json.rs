//! Parser for JSON stack lists.
//!
//! Input is an array of stacks, each an array of frame names, leaf-first:
//! `[["bar", "foo", "main"], ["baz", "foo", "main"]]`

use crate::utils::error::ParseError;
use log::debug;

/// Parse a JSON array of leaf-first stacks
///
/// # Errors
/// * `ParseError::JsonError` - input is not an array of string arrays
pub fn parse_json_stacks(input: &str) -> Result<Vec<Vec<String>>, ParseError> {
    let stacks: Vec<Vec<String>> = serde_json::from_str(input)?;
    debug!("Parsed {} JSON stacks", stacks.len());
    Ok(stacks)
}
