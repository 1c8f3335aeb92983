//! Suffix-sharing trie over call stacks.
//!
//! Stacks are supplied leaf-first (innermost frame at position 0). Every
//! unique suffix (a run from some frame out to the outermost frame) becomes
//! one node with a dense index, and every unique frame value becomes one
//! entry in the location table. Two stacks that share their outer frames
//! share the nodes for those frames.
//!
//! Example: `["bar", "foo", "main"]` and `["baz", "foo", "main"]` share the
//! nodes for `["main"]` and `["foo", "main"]`; only `"baz"` adds a node.

use super::arrays::StackArrays;
use crate::utils::config::ROOT_INDEX;
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Fixed-width index used for both the location table and suffix nodes
pub type Index = u32;

/// One unique suffix. The node's own dense index is its position in the
/// node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SuffixNode {
    /// Location table index of this suffix's innermost frame
    location: Index,

    /// Dense index of the suffix one frame shorter (toward the root)
    parent: Index,
}

/// Deduplicating stack encoder
///
/// **Public** - main entry point of the crate
///
/// The location type `L` only needs equality and hashing; `L::default()` is
/// the sentinel stored at location index 0 for the artificial root.
///
/// All tables are append-only. The trie does no internal locking, so
/// concurrent inserts must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct StackTrie<L> {
    /// Location values by location index
    locations: Vec<L>,

    /// Location value -> location index
    location_lookup: HashMap<L, Index>,

    /// Suffix nodes by dense index; index 0 is the root
    nodes: Vec<SuffixNode>,

    /// (parent dense index, location index) -> dense index
    ///
    /// The parent index identifies the whole outer part of the suffix, so the
    /// pair identifies the full frame sequence without building a textual key.
    suffix_lookup: HashMap<(Index, Index), Index>,

    /// Dense index of the full stack, one entry per insert
    stack_indices: Vec<Index>,
}

impl<L> StackTrie<L>
where
    L: Eq + Hash + Clone + Default,
{
    /// Create an empty trie holding only the root
    pub fn new() -> Self {
        let root = L::default();
        let mut location_lookup = HashMap::new();
        location_lookup.insert(root.clone(), ROOT_INDEX);

        Self {
            locations: vec![root],
            location_lookup,
            nodes: vec![SuffixNode {
                location: ROOT_INDEX,
                parent: ROOT_INDEX,
            }],
            suffix_lookup: HashMap::new(),
            stack_indices: Vec::new(),
        }
    }

    /// Build a trie by inserting every stack in order
    ///
    /// **Public** - convenience constructor
    ///
    /// # Arguments
    /// * `stacks` - Stacks in leaf-first order
    pub fn from_stacks<I, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[L]>,
    {
        let mut trie = Self::new();
        trie.extend(stacks);
        trie
    }

    /// Insert a stack and return the dense index of the node representing it
    ///
    /// **Public** - main mutation
    ///
    /// The returned index is appended to the stack index list on every call,
    /// including repeated inserts of a stack already present. An empty stack
    /// maps to the root (index 0).
    ///
    /// # Panics
    /// If the number of unique suffixes or locations exceeds `Index::MAX`.
    pub fn insert(&mut self, stack: &[L]) -> Index {
        let index = match self.lookup(stack) {
            Some(index) => index,
            None => self.insert_suffixes(stack),
        };

        self.stack_indices.push(index);
        index
    }

    /// Insert a stack `count` times
    ///
    /// Equivalent to `count` calls to `insert`: the trie is walked once and
    /// the index is recorded `count` times. A count of 0 records nothing and
    /// returns the stack's index without creating nodes, if it exists.
    pub fn insert_repeated(&mut self, stack: &[L], count: usize) -> Option<Index> {
        if count == 0 {
            return self.lookup(stack);
        }

        let index = self.insert(stack);
        self.stack_indices.extend(std::iter::repeat(index).take(count - 1));
        Some(index)
    }

    /// Walk from the outermost frame inward, creating missing suffix nodes
    fn insert_suffixes(&mut self, stack: &[L]) -> Index {
        let mut parent = ROOT_INDEX;

        for frame in stack.iter().rev() {
            let location = self.intern_location(frame);

            parent = match self.suffix_lookup.entry((parent, location)) {
                Entry::Occupied(existing) => *existing.get(),
                Entry::Vacant(slot) => {
                    let index = to_index(self.nodes.len());
                    self.nodes.push(SuffixNode { location, parent });
                    *slot.insert(index)
                }
            };
        }

        parent
    }

    /// Insert-or-get for the location table
    fn intern_location(&mut self, frame: &L) -> Index {
        if let Some(&index) = self.location_lookup.get(frame) {
            return index;
        }

        let index = to_index(self.locations.len());
        self.locations.push(frame.clone());
        self.location_lookup.insert(frame.clone(), index);
        index
    }

    /// Resolve a whole stack to its node without mutating anything
    fn lookup(&self, stack: &[L]) -> Option<Index> {
        stack.iter().rev().try_fold(ROOT_INDEX, |parent, frame| {
            let location = *self.location_lookup.get(frame)?;
            self.suffix_lookup.get(&(parent, location)).copied()
        })
    }

    /// Whether exactly this stack (or a longer stack ending in it) was inserted
    ///
    /// The empty stack is the root's zero-length suffix, so `exists(&[])` is
    /// true even on a fresh trie.
    pub fn exists(&self, stack: &[L]) -> bool {
        self.lookup(stack).is_some()
    }

    /// Dense index of the node for `stack`, or `None` if it is not present
    pub fn index_of(&self, stack: &[L]) -> Option<Index> {
        self.lookup(stack)
    }

    /// Number of unique suffix nodes, root included
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of unique locations, root sentinel included
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of `insert` calls so far
    pub fn insert_count(&self) -> usize {
        self.stack_indices.len()
    }

    /// Dense index of each inserted stack, in insertion order
    pub fn stack_indices(&self) -> &[Index] {
        &self.stack_indices
    }

    /// Snapshot the trie as four flat arrays
    ///
    /// **Public** - export for serialization or rebuilding
    ///
    /// Every call materializes fresh arrays; the trie is left untouched and
    /// may keep receiving inserts afterwards.
    pub fn export(&self) -> StackArrays<L> {
        let (parents, location_indices): (Vec<Index>, Vec<Index>) = self
            .nodes
            .iter()
            .map(|node| (node.parent, node.location))
            .unzip();

        debug!(
            "Exporting {} locations, {} suffix nodes, {} stack entries",
            self.locations.len(),
            self.nodes.len(),
            self.stack_indices.len()
        );

        StackArrays {
            location_table: self.locations.clone(),
            parents,
            location_indices,
            stack_indices: self.stack_indices.clone(),
        }
    }
}

impl<L> Default for StackTrie<L>
where
    L: Eq + Hash + Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, S> Extend<S> for StackTrie<L>
where
    L: Eq + Hash + Clone + Default,
    S: AsRef<[L]>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, stacks: I) {
        for stack in stacks {
            self.insert(stack.as_ref());
        }
    }
}

impl<L, S> FromIterator<S> for StackTrie<L>
where
    L: Eq + Hash + Clone + Default,
    S: AsRef<[L]>,
{
    fn from_iter<I: IntoIterator<Item = S>>(stacks: I) -> Self {
        Self::from_stacks(stacks)
    }
}

/// Convert a table length into the next index
fn to_index(len: usize) -> Index {
    match Index::try_from(len) {
        Ok(index) => index,
        Err(_) => panic!("stack trie exceeded {} entries", Index::MAX),
    }
}
