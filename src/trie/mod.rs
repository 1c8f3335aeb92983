//! Suffix-sharing stack trie and its flat array encoding.
//!
//! This module handles:
//! - Deduplicating stacks into shared suffix nodes
//! - Exporting the trie as four parallel arrays
//! - Rebuilding stacks from those arrays
//! - Summary statistics of an encoding

pub mod arrays;
pub mod stack_trie;
pub mod stats;

// Re-export main types and functions
pub use arrays::{rebuild, StackArrays};
pub use stack_trie::{Index, StackTrie};
pub use stats::EncodingStats;
