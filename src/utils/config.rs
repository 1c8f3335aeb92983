//! Configuration and constants for the encoder and the CLI.

/// Dense index of the artificial root suffix, and Location index of the
/// sentinel root Location
pub const ROOT_INDEX: u32 = 0;

/// Frame separator in collapsed stack lines ("main;foo;bar 3")
pub const COLLAPSED_FRAME_SEPARATOR: char = ';';

/// Lines starting with this prefix are ignored in collapsed input
pub const COLLAPSED_COMMENT_PREFIX: &str = "#";

/// Default output path for exported arrays
pub const DEFAULT_ARRAYS_PATH: &str = "arrays.json";

/// File extension that selects JSON stack input when no format is given
pub const JSON_EXTENSION: &str = "json";

/// Largest sample count accepted on one collapsed line
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;
