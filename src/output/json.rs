//! JSON output for encoded arrays.
//!
//! Writes `StackArrays` to JSON files with proper formatting and reads them back.

use super::prepare_path;
use crate::trie::StackArrays;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write encoded arrays to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `arrays` - Exported trie arrays
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let arrays = StackTrie::from_stacks(stacks).export();
/// write_arrays(&arrays, "arrays.json")?;
/// ```
pub fn write_arrays(
    arrays: &StackArrays<String>,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing arrays to: {}", output_path.display());
    prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, arrays).map_err(OutputError::SerializationFailed)?;

    info!(
        "Arrays written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read encoded arrays from a JSON file
///
/// The arrays are not validated here; call `StackArrays::validate` before
/// rebuilding from them.
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_arrays(input_path: impl AsRef<Path>) -> Result<StackArrays<String>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading arrays from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let arrays: StackArrays<String> =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Arrays loaded: {} locations, {} nodes, {} stacks",
        arrays.location_table.len(),
        arrays.node_count(),
        arrays.sample_count()
    );

    Ok(arrays)
}

/// Render rebuilt stacks as a pretty JSON array of leaf-first frame arrays
pub fn stacks_to_json(stacks: &[Vec<String>]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(stacks).map_err(OutputError::SerializationFailed)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::StackTrie;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn create_test_arrays() -> StackArrays<String> {
        let stacks: Vec<Vec<String>> = vec![
            vec!["bar".into(), "foo".into(), "main".into()],
            vec!["baz".into(), "foo".into(), "main".into()],
        ];
        StackTrie::from_stacks(&stacks).export()
    }

    #[test]
    fn test_write_and_read_arrays() {
        let arrays = create_test_arrays();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_arrays(&arrays, path).unwrap();
        let loaded = read_arrays(path).unwrap();

        assert_eq!(loaded, arrays);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/arrays.json");

        write_arrays(&create_test_arrays(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_arrays_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_arrays(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(OutputError::ReadFailed(_))));
        assert!(result.unwrap_err().to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn test_stacks_to_json() {
        let json = stacks_to_json(&[vec!["bar".to_string(), "main".to_string()], vec![]]).unwrap();
        let parsed: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![vec!["bar", "main"], vec![]]);
    }
}
