//! Stack Trie CLI
//!
//! Encodes call-stack samples into suffix-sharing arrays and rebuilds them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use stack_trie::commands::{
    display_version, execute_decode, execute_demo, execute_encode, validate_arrays_file,
    validate_decode_args, validate_encode_args, DecodeArgs, EncodeArgs,
};
use stack_trie::parser::StackFormat;
use stack_trie::utils::config::DEFAULT_ARRAYS_PATH;
use std::path::PathBuf;

/// Stack Trie - suffix-sharing encoding of call stacks
#[derive(Parser, Debug)]
#[command(name = "stack-trie")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode stacks into trie arrays
    Encode {
        /// Stack input file (collapsed lines or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format (detected from the extension if omitted)
        #[arg(short, long, value_enum)]
        format: Option<StackFormat>,

        /// Output path for the arrays JSON
        #[arg(short, long, default_value = DEFAULT_ARRAYS_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Rebuild stacks from trie arrays
    Decode {
        /// Arrays JSON written by encode
        #[arg(short, long, default_value = DEFAULT_ARRAYS_PATH)]
        input: PathBuf,

        /// Output format for the rebuilt stacks
        #[arg(short, long, value_enum, default_value = "collapsed")]
        format: StackFormat,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an arrays JSON file
    Validate {
        /// Path to arrays JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the encoding of built-in example stacks
    Demo,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Encode {
            input,
            format,
            output,
            summary,
        } => {
            let args = EncodeArgs {
                input,
                format,
                output,
                print_summary: summary,
            };

            validate_encode_args(&args)?;
            execute_encode(&args)?;
        }

        Commands::Decode {
            input,
            format,
            output,
        } => {
            let args = DecodeArgs {
                input,
                format,
                output,
            };

            validate_decode_args(&args)?;
            execute_decode(&args)?;
        }

        Commands::Validate { file } => {
            validate_arrays_file(&file)?;
        }

        Commands::Demo => {
            print!("{}", execute_demo());
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
