//! Reading stacks from input files.
//!
//! This module handles:
//! - Collapsed stack text ("main;foo;bar 3")
//! - JSON arrays of leaf-first stacks
//! - Format detection from the file extension

pub mod collapsed;
pub mod json;

use crate::utils::config::JSON_EXTENSION;
use crate::utils::error::ParseError;
use clap::ValueEnum;
use log::{debug, info};
use std::path::Path;

// Re-export main functions
pub use collapsed::{parse_collapsed, parse_collapsed_line};
pub use json::parse_json_stacks;

/// One input stack and how many times it was sampled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSample {
    /// Frames, leaf-first
    pub frames: Vec<String>,

    /// Number of samples of this stack
    pub count: usize,
}

impl StackSample {
    pub fn new(frames: Vec<String>, count: usize) -> Self {
        Self { frames, count }
    }
}

/// Stack input/output text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StackFormat {
    /// Outermost-first frames joined by ';', with an optional sample count
    Collapsed,
    /// JSON array of leaf-first frame arrays
    Json,
}

impl StackFormat {
    /// Pick a format from a file extension (`.json` -> Json, else Collapsed)
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => StackFormat::Json,
            _ => StackFormat::Collapsed,
        }
    }
}

/// Parse stack text in the given format
///
/// JSON stacks carry no counts, so each becomes a sample with count 1.
pub fn parse_stacks(input: &str, format: StackFormat) -> Result<Vec<StackSample>, ParseError> {
    match format {
        StackFormat::Collapsed => parse_collapsed(input),
        StackFormat::Json => Ok(parse_json_stacks(input)?
            .into_iter()
            .map(|frames| StackSample::new(frames, 1))
            .collect()),
    }
}

/// Read and parse a stack file
///
/// **Public** - used by the encode command
///
/// # Arguments
/// * `path` - Input file
/// * `format` - Explicit format, or `None` to detect from the extension
///
/// # Errors
/// * `ParseError::ReadFailed` - file cannot be read
/// * any error of the selected parser
pub fn read_stacks(
    path: impl AsRef<Path>,
    format: Option<StackFormat>,
) -> Result<Vec<StackSample>, ParseError> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| StackFormat::detect(path));

    debug!("Reading {:?} stacks from: {}", format, path.display());
    let input = std::fs::read_to_string(path)?;

    let samples = parse_stacks(&input, format)?;
    info!("Read {} stacks from {}", samples.len(), path.display());
    Ok(samples)
}
