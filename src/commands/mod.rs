//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod decode;
pub mod demo;
pub mod encode;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use decode::{execute_decode, validate_decode_args};
pub use demo::{execute_demo, Frame};
pub use encode::{execute_encode, validate_encode_args};
pub use models::{DecodeArgs, EncodeArgs};
pub use utils::{display_version, validate_arrays_file};
