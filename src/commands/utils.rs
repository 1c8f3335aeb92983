use crate::output::read_arrays;
use crate::trie::EncodingStats;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an arrays JSON file and print its statistics
pub fn validate_arrays_file(file_path: &Path) -> Result<EncodingStats> {
    println!("Validating arrays: {}", file_path.display());

    let arrays = read_arrays(file_path)?;
    arrays
        .validate()
        .with_context(|| format!("Malformed arrays in {}", file_path.display()))?;

    let stats = EncodingStats::from_arrays(&arrays);

    println!("✓ Valid stack arrays");
    println!("  Locations:    {}", stats.locations);
    println!("  Suffix nodes: {}", stats.suffix_nodes);
    println!("  Samples:      {}", stats.samples);
    println!("  Unique:       {}", stats.unique_stacks);

    Ok(stats)
}

/// Display version information
pub fn display_version() {
    println!("Stack Trie v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Suffix-sharing encoder for call-stack samples.");
}
