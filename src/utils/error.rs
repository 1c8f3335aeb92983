//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The trie itself never fails, so nothing here covers insert or export.

use thiserror::Error;

/// Errors that can occur while reading stacks from input files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Frame {frame:?} cannot be written as collapsed text: {reason}")]
    UnrepresentableFrame { frame: String, reason: &'static str },
}

/// Structural problems found when validating exported arrays
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArraysError {
    #[error("Location table is empty (missing root location)")]
    EmptyLocationTable,

    #[error("Suffix arrays are empty (missing root node)")]
    MissingRoot,

    #[error("Parent array has {parents} entries but location index array has {locations}")]
    LengthMismatch { parents: usize, locations: usize },

    #[error("Root node must reference itself and the root location")]
    RootNotSelfReferencing,

    #[error("Node {node} has parent {parent}, which does not precede it")]
    ParentNotPreceding { node: usize, parent: u32 },

    #[error("Node {node} references location {location}, but the table has {table_len} entries")]
    LocationOutOfBounds {
        node: usize,
        location: u32,
        table_len: usize,
    },

    #[error("Stack entry {entry} references node {node}, but only {count} nodes exist")]
    StackOutOfBounds {
        entry: usize,
        node: u32,
        count: usize,
    },
}
