//! Decode command implementation.
//!
//! Reads arrays written by encode, checks their structure, rebuilds every
//! recorded stack and prints them as collapsed lines or JSON.

use super::models::DecodeArgs;
use crate::output::{read_arrays, stacks_to_json, to_collapsed_lines, write_text};
use crate::parser::StackFormat;
use anyhow::{Context, Result};
use log::info;

/// Execute the decode command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The rebuilt stacks, leaf-first, one per recorded insert
pub fn execute_decode(args: &DecodeArgs) -> Result<Vec<Vec<String>>> {
    let arrays = read_arrays(&args.input)
        .with_context(|| format!("Failed to read arrays from {}", args.input.display()))?;

    arrays
        .validate()
        .with_context(|| format!("Malformed arrays in {}", args.input.display()))?;

    let stacks = arrays.rebuild();
    info!("Rebuilt {} stacks", stacks.len());

    let rendered = render_stacks(&stacks, args.format)?;

    match &args.output {
        Some(path) => write_text(&rendered, path).context("Failed to write rebuilt stacks")?,
        None => print!("{}", rendered),
    }

    Ok(stacks)
}

/// Render rebuilt stacks in the requested format
fn render_stacks(stacks: &[Vec<String>], format: StackFormat) -> Result<String> {
    let rendered = match format {
        StackFormat::Collapsed => {
            let mut text = to_collapsed_lines(stacks)?.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            text
        }
        StackFormat::Json => {
            let mut text = stacks_to_json(stacks)?;
            text.push('\n');
            text
        }
    };
    Ok(rendered)
}

/// Validate decode arguments
pub fn validate_decode_args(args: &DecodeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Arrays file not found: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_collapsed() {
        let stacks = vec![vec!["bar".to_string(), "main".to_string()]];
        let text = render_stacks(&stacks, StackFormat::Collapsed).unwrap();
        assert_eq!(text, "main;bar 1\n");
    }

    #[test]
    fn test_render_collapsed_nothing() {
        let text = render_stacks(&[], StackFormat::Collapsed).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = DecodeArgs {
            input: "/nonexistent/arrays.json".into(),
            ..Default::default()
        };
        assert!(validate_decode_args(&args).is_err());
    }
}
