//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included.
    pub nodes: u64,

    /// Terminal boards evaluated.
    pub leaves: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of visited nodes that triggered a cutoff.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64
        }
    }

    /// Merge another search's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}
