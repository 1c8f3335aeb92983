//! Summary statistics for an encoded set of stacks.
//!
//! Measures how much the suffix sharing saved: every non-root node stores
//! one frame, against the frames a naive list of stacks would store.

use super::arrays::StackArrays;
use log::debug;
use std::collections::HashSet;

/// Encoding statistics
///
/// **Public** - reported by the CLI after encoding or validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingStats {
    /// Number of recorded inserts
    pub samples: usize,

    /// Number of distinct stacks among the samples
    pub unique_stacks: usize,

    /// Suffix nodes, root included
    pub suffix_nodes: usize,

    /// Location table entries, sentinel included
    pub locations: usize,

    /// Frames across all samples if stored one stack at a time
    pub total_frames: usize,

    /// `total_frames` divided by non-root suffix nodes (0.0 when there are none)
    pub compression_ratio: f64,
}

impl EncodingStats {
    /// Compute statistics from exported arrays
    ///
    /// Assumes the arrays are well-shaped (see `StackArrays::validate`).
    pub fn from_arrays<L>(arrays: &StackArrays<L>) -> Self {
        // Parents precede children, so one forward pass yields every depth
        let mut depths = vec![0usize; arrays.node_count()];
        for node in 1..depths.len() {
            depths[node] = depths[arrays.parents[node] as usize] + 1;
        }

        let total_frames = arrays
            .stack_indices
            .iter()
            .map(|&node| depths[node as usize])
            .sum();

        let unique_stacks = arrays.stack_indices.iter().collect::<HashSet<_>>().len();

        let stored_frames = arrays.node_count().saturating_sub(1);
        let compression_ratio = if stored_frames > 0 {
            total_frames as f64 / stored_frames as f64
        } else {
            0.0
        };

        let stats = Self {
            samples: arrays.sample_count(),
            unique_stacks,
            suffix_nodes: arrays.node_count(),
            locations: arrays.location_table.len(),
            total_frames,
            compression_ratio,
        };

        debug!("Encoding stats: {:?}", stats);
        stats
    }

    /// Get a one-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} samples ({} unique stacks), {} suffix nodes, {} locations, {} frames, {:.2}x sharing",
            self.samples,
            self.unique_stacks,
            self.suffix_nodes,
            self.locations,
            self.total_frames,
            self.compression_ratio
        )
    }
}
