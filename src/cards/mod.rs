//! Card model: suits, ranks, roles, encoding, and deck helpers.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(suit, rank)` value
//! - `Role`: Dungeon role (enemy, weapon, potions, toolkit)
//! - `ParseCardError`: Fail-fast error for textual card input
//!
//! Deck builders (`standard_deck`, `scoundrel_deck`, `shuffled`) are
//! conveniences for callers; the solver accepts any ordered deck.

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Role, Suit, MAX_RANK, MIN_RANK};
pub use deck::{scoundrel_deck, shuffled, standard_deck};
