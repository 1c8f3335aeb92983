//! Flat four-array encoding of a stack trie, and reconstruction from it.
//!
//! Layout:
//! - `location_table[i]`   - location value with location index `i` (0 is the sentinel)
//! - `parents[n]`          - dense index of node `n`'s parent (0 for the root)
//! - `location_indices[n]` - location index of node `n`'s innermost frame
//! - `stack_indices[k]`    - dense index of the stack recorded by the k-th insert

use super::stack_trie::Index;
use crate::utils::config::ROOT_INDEX;
use crate::utils::error::ArraysError;
use serde::{Deserialize, Serialize};

/// Exported trie arrays
///
/// **Public** - boundary artifact handed to serializers and `rebuild`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackArrays<L> {
    /// Unique locations by location index
    pub location_table: Vec<L>,

    /// Parent dense index per suffix node
    pub parents: Vec<Index>,

    /// Location index per suffix node
    pub location_indices: Vec<Index>,

    /// Dense index per insert, in insertion order
    pub stack_indices: Vec<Index>,
}

impl<L> StackArrays<L> {
    /// Number of suffix nodes, root included
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of recorded inserts
    pub fn sample_count(&self) -> usize {
        self.stack_indices.len()
    }

    /// Rebuild every recorded stack, leaf-first
    pub fn rebuild(&self) -> Vec<Vec<L>>
    where
        L: Clone,
    {
        rebuild(
            &self.location_table,
            &self.parents,
            &self.location_indices,
            &self.stack_indices,
        )
    }

    /// Check that the arrays form a well-shaped trie
    ///
    /// **Public** - run this on arrays loaded from untrusted input before
    /// calling `rebuild`, which performs no checks of its own.
    ///
    /// Requiring every parent to precede its child guarantees that each
    /// parent chain reaches the root.
    ///
    /// # Errors
    /// The first structural problem found, as an `ArraysError`
    pub fn validate(&self) -> Result<(), ArraysError> {
        if self.location_table.is_empty() {
            return Err(ArraysError::EmptyLocationTable);
        }

        if self.parents.len() != self.location_indices.len() {
            return Err(ArraysError::LengthMismatch {
                parents: self.parents.len(),
                locations: self.location_indices.len(),
            });
        }

        match (self.parents.first(), self.location_indices.first()) {
            (None, _) | (_, None) => return Err(ArraysError::MissingRoot),
            (Some(&ROOT_INDEX), Some(&ROOT_INDEX)) => {}
            _ => return Err(ArraysError::RootNotSelfReferencing),
        }

        let table_len = self.location_table.len();
        for (node, (&parent, &location)) in self
            .parents
            .iter()
            .zip(&self.location_indices)
            .enumerate()
            .skip(1)
        {
            if parent as usize >= node {
                return Err(ArraysError::ParentNotPreceding { node, parent });
            }
            if location as usize >= table_len {
                return Err(ArraysError::LocationOutOfBounds {
                    node,
                    location,
                    table_len,
                });
            }
        }

        let count = self.node_count();
        if let Some((entry, &node)) = self
            .stack_indices
            .iter()
            .enumerate()
            .find(|&(_, &node)| node as usize >= count)
        {
            return Err(ArraysError::StackOutOfBounds { entry, node, count });
        }

        Ok(())
    }
}

/// Reconstruct stacks from exported arrays
///
/// **Public** - decoding entry point; needs no live trie
///
/// For each entry of `stack_indices`, follows the parent chain down to the
/// root, emitting one location per node. Output stacks are leaf-first and
/// appear once per entry, so duplicates are reproduced.
///
/// # Panics
/// On an index outside its array. Arrays whose parent chains never reach the
/// root make this loop forever; use `StackArrays::validate` first when the
/// arrays did not come from `StackTrie::export`.
pub fn rebuild<L: Clone>(
    location_table: &[L],
    parents: &[Index],
    location_indices: &[Index],
    stack_indices: &[Index],
) -> Vec<Vec<L>> {
    stack_indices
        .iter()
        .map(|&start| {
            let mut stack = Vec::new();
            let mut current = start as usize;
            while current != ROOT_INDEX as usize {
                stack.push(location_table[location_indices[current] as usize].clone());
                current = parents[current] as usize;
            }
            stack
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_arrays() -> StackArrays<String> {
        StackArrays {
            location_table: ["", "main", "foo", "bar", "baz"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            parents: vec![0, 0, 1, 2, 2],
            location_indices: vec![0, 1, 2, 3, 4],
            stack_indices: vec![3, 4, 3, 0],
        }
    }

    #[test]
    fn test_rebuild_walks_to_root() {
        let stacks = sample_arrays().rebuild();

        assert_eq!(
            stacks,
            vec![
                vec!["bar", "foo", "main"],
                vec!["baz", "foo", "main"],
                vec!["bar", "foo", "main"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_rebuild_nothing_recorded() {
        let mut arrays = sample_arrays();
        arrays.stack_indices.clear();
        assert!(arrays.rebuild().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_rebuild_out_of_bounds_panics() {
        let mut arrays = sample_arrays();
        arrays.stack_indices = vec![9];
        arrays.rebuild();
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert_eq!(sample_arrays().validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_location_table() {
        let mut arrays = sample_arrays();
        arrays.location_table.clear();
        assert_eq!(arrays.validate(), Err(ArraysError::EmptyLocationTable));
    }

    #[test]
    fn test_validate_missing_root() {
        let arrays: StackArrays<String> = StackArrays {
            location_table: vec![String::new()],
            parents: vec![],
            location_indices: vec![],
            stack_indices: vec![],
        };
        assert_eq!(arrays.validate(), Err(ArraysError::MissingRoot));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mut arrays = sample_arrays();
        arrays.location_indices.pop();
        assert_eq!(
            arrays.validate(),
            Err(ArraysError::LengthMismatch {
                parents: 5,
                locations: 4
            })
        );
    }

    #[test]
    fn test_validate_root_not_self_referencing() {
        let mut arrays = sample_arrays();
        arrays.parents[0] = 1;
        assert_eq!(arrays.validate(), Err(ArraysError::RootNotSelfReferencing));
    }

    #[test]
    fn test_validate_cycle() {
        let mut arrays = sample_arrays();
        arrays.parents[2] = 3;
        assert_eq!(
            arrays.validate(),
            Err(ArraysError::ParentNotPreceding { node: 2, parent: 3 })
        );
    }

    #[test]
    fn test_validate_location_out_of_bounds() {
        let mut arrays = sample_arrays();
        arrays.location_indices[4] = 5;
        assert_eq!(
            arrays.validate(),
            Err(ArraysError::LocationOutOfBounds {
                node: 4,
                location: 5,
                table_len: 5
            })
        );
    }

    #[test]
    fn test_validate_stack_out_of_bounds() {
        let mut arrays = sample_arrays();
        arrays.stack_indices.push(7);
        assert_eq!(
            arrays.validate(),
            Err(ArraysError::StackOutOfBounds {
                entry: 4,
                node: 7,
                count: 5
            })
        );
    }
}
