//! Output writers for encoded arrays and rebuilt stacks.
//!
//! This module handles writing data to disk in various formats:
//! - JSON arrays (the four-array encoding)
//! - JSON stack lists
//! - Text dumps and collapsed stack lines

pub mod json;
pub mod text;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_arrays, stacks_to_json, write_arrays};
pub use text::{check_collapsed_frame, render_arrays, to_collapsed_lines, write_text};

/// Validate that output path is writable
///
/// **Public** - shared by every writer
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories of `path`
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Validate `path` and prepare its parent directory
pub(crate) fn prepare_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;
    ensure_parent_dir(path)
}
