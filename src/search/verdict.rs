//! Solver verdicts.
//!
//! A verdict is three-way: proved clearable, proved unclearable, or
//! indeterminate because a budget ran out or the caller cancelled. An
//! indeterminate verdict is *not* evidence of unclearability; callers
//! typically reshuffle and retry.

use serde::{Deserialize, Serialize};

use crate::rules::Action;

/// Why a search stopped without an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The node budget was exhausted.
    NodeLimit,
    /// The wall-clock budget was exhausted.
    TimeLimit,
    /// The caller's cancel token fired.
    Cancelled,
}

/// Outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// A winning action sequence exists. `path` is populated when the
    /// search was asked to reconstruct it; `bonus` is the last-card
    /// healing-potion bonus (0 for a plain exhaustion win).
    Clearable {
        path: Option<Vec<Action>>,
        bonus: u8,
    },
    /// Exhaustive search proved no winning sequence exists.
    Unclearable,
    /// The search stopped before reaching a proof either way.
    Indeterminate(StopReason),
}

impl Verdict {
    /// `Some(true)` / `Some(false)` for a proved verdict, `None` when
    /// indeterminate.
    #[must_use]
    pub fn clearable(&self) -> Option<bool> {
        match self {
            Verdict::Clearable { .. } => Some(true),
            Verdict::Unclearable => Some(false),
            Verdict::Indeterminate(_) => None,
        }
    }

    /// The winning path, if one was found and requested.
    #[must_use]
    pub fn path(&self) -> Option<&[Action]> {
        match self {
            Verdict::Clearable { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearable_accessor() {
        let won = Verdict::Clearable { path: None, bonus: 0 };
        assert_eq!(won.clearable(), Some(true));

        assert_eq!(Verdict::Unclearable.clearable(), Some(false));
        assert_eq!(
            Verdict::Indeterminate(StopReason::NodeLimit).clearable(),
            None
        );
    }

    #[test]
    fn test_path_accessor() {
        let with_path = Verdict::Clearable {
            path: Some(vec![Action::Flee]),
            bonus: 0,
        };
        assert_eq!(with_path.path(), Some(&[Action::Flee][..]));
        assert_eq!(Verdict::Unclearable.path(), None);
    }

    #[test]
    fn test_serialization() {
        let verdict = Verdict::Indeterminate(StopReason::TimeLimit);
        let json = serde_json::to_string(&verdict).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, back);
    }
}
