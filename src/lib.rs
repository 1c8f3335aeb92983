//! Stack Trie
//!
//! Deduplicating encoder for call-stack samples. Stacks are merged into a
//! trie of shared suffixes and exported as four flat arrays, from which
//! every inserted stack can be rebuilt exactly.
//!
//! ## Getting Started
//!
//! ```
//! use stack_trie::trie::StackTrie;
//!
//! let mut trie = StackTrie::new();
//! trie.insert(&["bar", "foo", "main"]);
//! trie.insert(&["baz", "foo", "main"]);
//!
//! let arrays = trie.export();
//! assert_eq!(arrays.rebuild(), vec![vec!["bar", "foo", "main"], vec!["baz", "foo", "main"]]);
//! ```
//!
//! The `stack-trie` binary wraps this with collapsed/JSON file input.

pub mod commands;
pub mod output;
pub mod parser;
pub mod trie;
pub mod utils;
