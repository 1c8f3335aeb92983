use crate::parser::StackFormat;
use crate::utils::config::DEFAULT_ARRAYS_PATH;
use std::path::PathBuf;

/// Arguments for the encode command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct EncodeArgs {
    /// Stack input file
    pub input: PathBuf,

    /// Input format (None = detect from extension)
    pub format: Option<StackFormat>,

    /// Output path for the arrays JSON
    pub output: PathBuf,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

impl Default for EncodeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            format: None,
            output: PathBuf::from(DEFAULT_ARRAYS_PATH),
            print_summary: false,
        }
    }
}

/// Arguments for the decode command
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    /// Arrays JSON produced by encode
    pub input: PathBuf,

    /// Format of the rebuilt stacks
    pub format: StackFormat,

    /// Output path (None = stdout)
    pub output: Option<PathBuf>,
}

impl Default for DecodeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_ARRAYS_PATH),
            format: StackFormat::Collapsed,
            output: None,
        }
    }
}
