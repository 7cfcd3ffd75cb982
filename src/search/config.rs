//! Solver configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Solver configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Keep special-rank red cards (poison potions, repair toolkits) in
    /// the dungeon. When false they are filtered out of the input deck.
    pub include_special_cards: bool,

    /// Starting health, clamped to 20.
    pub starting_hp: u8,

    /// Hard cap on expanded search nodes. The search reports an
    /// indeterminate verdict when it would exceed this.
    pub max_nodes: u64,

    /// Optional wall-clock budget. Only polled when set, so budget-free
    /// searches pay no timing overhead.
    pub time_limit: Option<Duration>,

    /// Reconstruct and return a winning action sequence on success.
    pub return_path: bool,

    /// Node batch between cancellation polls when driving the solver
    /// with [`Solver::run`](crate::search::Solver::run).
    pub yield_interval: u32,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            include_special_cards: true,
            starting_hp: 20,
            max_nodes: 5_000_000,
            time_limit: None,
            return_path: false,
            yield_interval: 4_096,
        }
    }
}

impl SolveOptions {
    /// Set whether special-rank red cards stay in the dungeon.
    #[must_use]
    pub fn with_special_cards(mut self, include: bool) -> Self {
        self.include_special_cards = include;
        self
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: u8) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Request winning-path reconstruction.
    #[must_use]
    pub fn with_return_path(mut self, return_path: bool) -> Self {
        self.return_path = return_path;
        self
    }

    /// Set the batch size between cancellation polls in `run`.
    #[must_use]
    pub fn with_yield_interval(mut self, interval: u32) -> Self {
        self.yield_interval = interval.max(1);
        self
    }
}
