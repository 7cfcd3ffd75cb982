//! The dungeon search driver: budgets, verdicts, cooperative stepping.
//!
//! ## Key Types
//!
//! - `Solver` / `solve`: iterative DFS with memoization
//! - `SolveOptions`: budgets and feature switches
//! - `Verdict` / `StopReason`: proved / disproved / indeterminate
//! - `CancelToken`: cooperative cancellation handle
//! - `SearchStats`: diagnostics

pub mod cancel;
pub mod config;
pub mod driver;
pub mod stats;
pub mod verdict;

pub use cancel::CancelToken;
pub use config::SolveOptions;
pub use driver::{solve, Solver, Step};
pub use stats::SearchStats;
pub use verdict::{StopReason, Verdict};
