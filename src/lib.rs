//! # scoundrel-solver
//!
//! An exhaustive solver for the single-player card dungeon *Scoundrel*:
//! given a shuffled deck, decide whether some sequence of player
//! decisions clears the whole dungeon without health reaching zero, and
//! optionally reconstruct one winning action sequence.
//!
//! ## Design
//!
//! - **Value-snapshot states**: applying an action forks a new
//!   `DungeonState`; parents are never mutated. The deck is an `im`
//!   persistent vector so forking is cheap.
//!
//! - **Memoized DFS**: an explicit frame stack (no recursion limits,
//!   suspendable between batches) with a visited set keyed by a
//!   collision-free canonical state encoding.
//!
//! - **Three-way verdicts**: clearable, proved unclearable, or
//!   indeterminate when a node/time budget or a cancellation cut the
//!   search short. Budget exhaustion is a verdict, never an error.
//!
//! - **Cooperative scheduling**: `Solver::step` does a bounded batch of
//!   work and yields; the cancel token is polled at those boundaries
//!   only. One solver owns all of its search state, so independent
//!   solves interleave freely without locks.
//!
//! ## Modules
//!
//! - `cards`: card values, roles, the memo-key bijection, deck helpers
//! - `state`: the dungeon snapshot and its canonical key
//! - `rules`: action enumeration and the transition engine
//! - `search`: the budgeted, cooperative DFS driver
//!
//! ## Example
//!
//! ```
//! use scoundrel_solver::{scoundrel_deck, shuffled, solve, SolveOptions};
//!
//! let deck = shuffled(scoundrel_deck(), 42);
//! let verdict = solve(&deck, &SolveOptions::default().with_max_nodes(200_000));
//!
//! // Some(true) / Some(false) when proved, None when the budget ran out.
//! let _ = verdict.clearable();
//! ```

pub mod cards;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{scoundrel_deck, shuffled, standard_deck, Card, ParseCardError, Role, Suit};
pub use crate::rules::{apply, legal_actions, Action, ActionList, Outcome};
pub use crate::search::{
    solve, CancelToken, SearchStats, SolveOptions, Solver, Step, StopReason, Verdict,
};
pub use crate::state::{DungeonState, StateKey, MAX_HP, TABLE_SLOTS};
