//! Iterative depth-first clearability search.
//!
//! The driver emulates recursion with an explicit frame stack so depth
//! is never limited by the call stack and the search can suspend
//! between batches. Each frame holds a state, its lazily-built legal
//! action list, and a cursor into that list; the live stack is exactly
//! the root-to-current action chain, which is what winning-path
//! reconstruction walks.
//!
//! Memoization: on first visit to a frame the state's canonical key is
//! inserted into the visited set; a key already present means the state
//! was reached before through a different action order, and the frame is
//! popped unexpanded. Dead transitions never produce a frame at all.
//!
//! ## Cooperative use
//!
//! [`Solver::step`] runs a bounded batch of work and returns
//! [`Step::Pending`] or [`Step::Done`]. Hosts interleave other work (or
//! other solves) between calls. The cancel token is polled at step
//! entry, the wall-clock budget at step entry and periodically within a
//! batch; a search is never killed mid-node.

use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cards::Card;
use crate::rules::{apply, legal_actions, Action, ActionList, Outcome};
use crate::state::{DungeonState, StateKey};

use super::cancel::CancelToken;
use super::config::SolveOptions;
use super::stats::SearchStats;
use super::verdict::{StopReason, Verdict};

/// Node expansions between wall-clock polls inside a batch.
const TIME_POLL_INTERVAL: u64 = 64;

/// Result of one cooperative step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// This step's batch is consumed; call `step` again.
    Pending,
    /// The search finished with a verdict.
    Done(Verdict),
}

/// One node of the emulated recursion.
struct Frame {
    state: DungeonState,
    /// Action that produced this state from its parent; `None` at root.
    incoming: Option<Action>,
    /// Legal actions, built on first visit.
    actions: ActionList,
    /// Next action to explore.
    cursor: usize,
    /// First-visit bookkeeping (key insertion, enumeration) has run.
    expanded: bool,
}

impl Frame {
    fn new(state: DungeonState, incoming: Option<Action>) -> Self {
        Self {
            state,
            incoming,
            actions: ActionList::new(),
            cursor: 0,
            expanded: false,
        }
    }
}

/// Exhaustive dungeon search over one deck.
///
/// Every solver owns its frame stack and visited set outright; nothing
/// is shared between concurrent solves, so hosts run several solvers as
/// independent cooperative tasks without locking.
pub struct Solver {
    options: SolveOptions,
    stack: Vec<Frame>,
    visited: FxHashSet<StateKey>,
    cancel: CancelToken,
    stats: SearchStats,
    /// Set on the first `step` call.
    started: Option<Instant>,
    deadline: Option<Instant>,
    finished: Option<Verdict>,
}

impl Solver {
    /// Build a solver over the given deck.
    #[must_use]
    pub fn new(deck: &[Card], options: SolveOptions) -> Self {
        let initial =
            DungeonState::initial(deck, options.include_special_cards, options.starting_hp);
        debug!(
            deck_len = deck.len(),
            max_nodes = options.max_nodes,
            "starting clearability search"
        );

        // Degenerate roots resolve without searching: an empty dungeon
        // is already cleared, a dead start proves nothing can win.
        let finished = if initial.is_dead() {
            Some(Verdict::Unclearable)
        } else if initial.is_win() {
            Some(Verdict::Clearable {
                path: options.return_path.then(Vec::new),
                bonus: 0,
            })
        } else {
            None
        };

        Self {
            stack: vec![Frame::new(initial, None)],
            visited: FxHashSet::default(),
            cancel: CancelToken::new(),
            stats: SearchStats::new(),
            started: None,
            deadline: None,
            finished,
            options,
        }
    }

    /// Use a caller-owned cancellation token instead of a fresh one.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Handle for cancelling this solve from elsewhere.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Statistics so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The options this solver runs with.
    #[must_use]
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Run at most `batch` units of work, then yield.
    ///
    /// Once `Done` is returned the verdict is latched; further calls
    /// return the same verdict.
    pub fn step(&mut self, batch: u32) -> Step {
        if let Some(verdict) = &self.finished {
            return Step::Done(verdict.clone());
        }
        if self.cancel.is_cancelled() {
            return self.finish(Verdict::Indeterminate(StopReason::Cancelled));
        }

        let started = *self.started.get_or_insert_with(Instant::now);
        if self.deadline.is_none() {
            self.deadline = self.options.time_limit.map(|limit| started + limit);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return self.finish(Verdict::Indeterminate(StopReason::TimeLimit));
            }
        }

        for _ in 0..batch.max(1) {
            if self.stack.is_empty() {
                // Every reachable state explored without a win.
                return self.finish(Verdict::Unclearable);
            }
            let top = self.stack.len() - 1;

            if !self.stack[top].expanded {
                let key = StateKey::of(&self.stack[top].state);
                if !self.visited.insert(key) {
                    // Reached before via a different action order.
                    self.stats.pruned_visited += 1;
                    self.stack.pop();
                    continue;
                }

                if self.stats.nodes_expanded >= self.options.max_nodes {
                    debug!(nodes = self.stats.nodes_expanded, "node budget exhausted");
                    return self.finish(Verdict::Indeterminate(StopReason::NodeLimit));
                }
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(self.stack.len() as u32);

                let frame = &mut self.stack[top];
                frame.actions = legal_actions(&frame.state);
                frame.expanded = true;

                if let Some(deadline) = self.deadline {
                    if self.stats.nodes_expanded % TIME_POLL_INTERVAL == 0
                        && Instant::now() >= deadline
                    {
                        debug!(nodes = self.stats.nodes_expanded, "time budget exhausted");
                        return self.finish(Verdict::Indeterminate(StopReason::TimeLimit));
                    }
                }
            }

            let cursor = self.stack[top].cursor;
            if cursor >= self.stack[top].actions.len() {
                // All children explored; backtrack.
                self.stack.pop();
                continue;
            }
            let action = self.stack[top].actions[cursor];
            self.stack[top].cursor += 1;

            match apply(&self.stack[top].state, action) {
                Outcome::Continue(next) => {
                    self.stack.push(Frame::new(next, Some(action)));
                }
                Outcome::Won { bonus } => {
                    let path = self.options.return_path.then(|| self.winning_path(action));
                    return self.finish(Verdict::Clearable { path, bonus });
                }
                Outcome::Dead => {
                    self.stats.dead_ends += 1;
                }
                Outcome::Invalid => {
                    debug_assert!(false, "enumerated action failed its precondition: {action}");
                }
            }
        }

        Step::Pending
    }

    /// Drive `step` to completion, polling cancellation between batches
    /// of `yield_interval` work units.
    pub fn run(&mut self) -> Verdict {
        loop {
            if let Step::Done(verdict) = self.step(self.options.yield_interval) {
                return verdict;
            }
        }
    }

    /// The live stack is the root-to-current parent chain; collect its
    /// incoming actions and append the action that won.
    fn winning_path(&self, winning: Action) -> Vec<Action> {
        let mut path: Vec<Action> = self.stack.iter().filter_map(|f| f.incoming).collect();
        path.push(winning);
        path
    }

    fn finish(&mut self, verdict: Verdict) -> Step {
        if let Some(started) = self.started {
            self.stats.time_us = started.elapsed().as_micros() as u64;
        }
        debug!(
            nodes = self.stats.nodes_expanded,
            pruned = self.stats.pruned_visited,
            time_us = self.stats.time_us,
            clearable = ?verdict.clearable(),
            "search finished"
        );
        self.finished = Some(verdict.clone());
        Step::Done(verdict)
    }
}

/// One-shot entry point: search the deck to completion.
#[must_use]
pub fn solve(deck: &[Card], options: &SolveOptions) -> Verdict {
    Solver::new(deck, options.clone()).run()
}
