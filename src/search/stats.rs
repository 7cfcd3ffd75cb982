//! Search statistics for diagnostics and budget tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// States expanded (entered the visited set).
    pub nodes_expanded: u64,

    /// States pruned because their key was already visited.
    pub pruned_visited: u64,

    /// Transitions that ended in death.
    pub dead_ends: u64,

    /// Deepest frame stack reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Node expansions per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
