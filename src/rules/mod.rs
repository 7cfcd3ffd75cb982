//! Game rules: actions, their enumeration, and the transition engine.
//!
//! ## Key Types
//!
//! - `Action`: one player decision (flee, fight, equip, toolkit, potion)
//! - `legal_actions`: every legal action for a state, deterministic order
//! - `apply` / `Outcome`: one-step transition to a successor or terminal

pub mod action;
pub mod enumerate;
pub mod transition;

pub use action::Action;
pub use enumerate::{legal_actions, ActionList};
pub use transition::{apply, Outcome};
