//! Encode command implementation.
//!
//! The encode command:
//! 1. Reads stacks from a collapsed or JSON file
//! 2. Inserts them into a stack trie in order
//! 3. Exports the four arrays
//! 4. Writes the arrays as JSON

use super::models::EncodeArgs;
use crate::output::write_arrays;
use crate::parser::read_stacks;
use crate::trie::{EncodingStats, StackTrie};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the encode command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Statistics of the written encoding
///
/// # Errors
/// * Input read or parse failures
/// * File write errors
pub fn execute_encode(args: &EncodeArgs) -> Result<EncodingStats> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading stacks from {}...", args.input.display());
    let samples = read_stacks(&args.input, args.format)
        .with_context(|| format!("Failed to read stacks from {}", args.input.display()))?;

    info!("Step 2/3: Encoding {} stacks...", samples.len());
    let mut trie = StackTrie::new();
    for sample in &samples {
        trie.insert_repeated(&sample.frames, sample.count);
    }
    let arrays = trie.export();

    let stats = EncodingStats::from_arrays(&arrays);
    info!("Encoding: {}", stats.summary());

    info!("Step 3/3: Writing arrays...");
    write_arrays(&arrays, &args.output).context("Failed to write arrays JSON")?;
    info!("✓ Arrays written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("ENCODING SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Samples:        {}", stats.samples);
        println!("Unique stacks:  {}", stats.unique_stacks);
        println!("Suffix nodes:   {}", stats.suffix_nodes);
        println!("Locations:      {}", stats.locations);
        println!("Total frames:   {}", stats.total_frames);
        println!("Sharing ratio:  {:.2}x", stats.compression_ratio);
        println!("{}", "=".repeat(60));
    }

    debug!("Encode completed in {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(stats)
}

/// Validate encode arguments
///
/// **Public** - can be called before execute_encode for early validation
pub fn validate_encode_args(args: &EncodeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output == args.input {
        anyhow::bail!("Output path must differ from the input path");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_empty_input() {
        let args = EncodeArgs::default();
        assert!(validate_encode_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = EncodeArgs {
            input: PathBuf::from("/nonexistent/stacks.folded"),
            ..Default::default()
        };
        assert!(validate_encode_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_same_as_input() {
        let input = tempfile::NamedTempFile::new().unwrap();
        let args = EncodeArgs {
            input: input.path().to_path_buf(),
            output: input.path().to_path_buf(),
            ..Default::default()
        };
        assert!(validate_encode_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_valid() {
        let input = tempfile::NamedTempFile::new().unwrap();
        let args = EncodeArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };
        assert!(validate_encode_args(&args).is_ok());
    }
}
