//! Demo command: encode a fixed set of example stacks and print the result.
//!
//! Shows both a plain string location type and a composite
//! `{file_id, address}` frame, which is how native profilers identify
//! frames before symbolization.

use crate::output::render_arrays;
use crate::trie::StackTrie;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Native frame identified by the mapped file and an address within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub file_id: u64,
    pub address: u64,
}

impl Frame {
    pub fn new(file_id: u64, address: u64) -> Self {
        Self { file_id, address }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:#x}", self.file_id, self.address)
    }
}

/// Example symbol stacks, leaf frame first
pub fn demo_symbol_stacks() -> Vec<Vec<String>> {
    vec![
        symbols(&["bar", "foo", "main"]),
        symbols(&["bar", "foo", "main"]),
        symbols(&["baz1", "foo", "main"]),
        symbols(&["baz1", "bar", "foo", "main"]),
        symbols(&["baz2", "bar", "foo", "main"]),
        symbols(&["baz2", "foo", "main"]),
        symbols(&["why", "why", "what"]),
    ]
}

fn symbols(frames: &[&str]) -> Vec<String> {
    frames.iter().map(|frame| frame.to_string()).collect()
}

/// Example native stacks sharing their two outer frames
pub fn demo_frame_stacks() -> Vec<Vec<Frame>> {
    vec![
        vec![Frame::new(1, 0x100), Frame::new(2, 0x200), Frame::new(3, 0x300)],
        vec![Frame::new(4, 0x400), Frame::new(2, 0x200), Frame::new(3, 0x300)],
    ]
}

/// Execute the demo command
///
/// **Public** - returns the text main.rs prints
pub fn execute_demo() -> String {
    let symbols = StackTrie::from_stacks(demo_symbol_stacks()).export();
    let frames = StackTrie::from_stacks(demo_frame_stacks()).export();

    format!("{}\n{}", render_arrays(&symbols), render_arrays(&frames))
}
