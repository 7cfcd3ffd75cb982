//! Card values, role classification, and the memoization-key bijection.
//!
//! A `Card` is an immutable `(suit, rank)` value; its gameplay `Role` is a
//! pure function of the two fields:
//!
//! - Clubs/Spades → `Enemy`
//! - Diamonds rank ≤ 10 → `Weapon`, rank ≥ 11 → `RepairToolkit`
//! - Hearts rank ≤ 10 → `HealingPotion`, rank ≥ 11 → `PoisonPotion`
//!
//! Roles are mutually exclusive and cover the full 52-card space.
//!
//! ## Encoding
//!
//! `encode`/`decode` form a documented bijection between cards and the
//! codes `1..=52`, with `0` reserved for "no card". This encoding exists
//! solely for memoization keys and never leaks into the public `Card`
//! contract (which stays a tagged `(suit, rank)` pair).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum card rank (deuce).
pub const MIN_RANK: u8 = 2;

/// Maximum card rank (ace, which ranks high).
pub const MAX_RANK: u8 = 14;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical (encoding) order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Index of this suit within `ALL`, used by the card bijection.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

/// What a card does when interacted with in the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Clubs or Spades: fight it with fists or an equipped weapon.
    Enemy,
    /// Diamonds rank ≤ 10: equippable, reduces enemy damage by its rank.
    Weapon,
    /// Hearts rank ≤ 10: restores `rank` health, once per room.
    HealingPotion,
    /// Hearts rank ≥ 11: deals 10 damage when drunk.
    PoisonPotion,
    /// Diamonds rank ≥ 11: undoes the most recent weapon kill.
    RepairToolkit,
}

/// A playing card: suit plus rank in `2..=14` (11=J, 12=Q, 13=K, 14=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    /// Create a card. Rank must be in `2..=14`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((MIN_RANK..=MAX_RANK).contains(&rank), "rank out of range");
        Self { suit, rank }
    }

    /// Classify this card into its unique dungeon role.
    #[must_use]
    pub fn role(self) -> Role {
        match self.suit {
            Suit::Clubs | Suit::Spades => Role::Enemy,
            Suit::Diamonds if self.rank <= 10 => Role::Weapon,
            Suit::Diamonds => Role::RepairToolkit,
            Suit::Hearts if self.rank <= 10 => Role::HealingPotion,
            Suit::Hearts => Role::PoisonPotion,
        }
    }

    /// True for the special-rank red cards (J/Q/K/A of Hearts/Diamonds)
    /// that `include_special = false` strips from the dungeon.
    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(self.role(), Role::PoisonPotion | Role::RepairToolkit)
    }

    /// Encode this card as a memoization-key code in `1..=52`.
    ///
    /// `0` is reserved for "no card" (an empty table slot).
    #[must_use]
    pub fn encode(self) -> u8 {
        self.suit.index() * 13 + (self.rank - MIN_RANK) + 1
    }

    /// Decode a memoization-key code. `0` and out-of-range codes are `None`.
    #[must_use]
    pub fn decode(code: u8) -> Option<Card> {
        if code == 0 || code > 52 {
            return None;
        }
        let idx = code - 1;
        let suit = Suit::ALL[(idx / 13) as usize];
        let rank = idx % 13 + MIN_RANK;
        Some(Card { suit, rank })
    }
}

/// Error produced when parsing a card from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card string")]
    Empty,
    #[error("unrecognized rank {0:?}")]
    BadRank(String),
    #[error("unrecognized suit {0:?}")]
    BadSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse forms like `"AS"`, `"10h"`, `"kd"`, `"2♣"`: rank first,
    /// then a one-character suit (letter or unicode symbol).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_str = chars.as_str();

        let suit = match suit_ch.to_ascii_uppercase() {
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::BadSuit(suit_ch.to_string())),
        };

        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            other => match other.parse::<u8>() {
                Ok(r) if (MIN_RANK..=10).contains(&r) => r,
                _ => return Err(ParseCardError::BadRank(rank_str.to_string())),
            },
        };

        Ok(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            14 => write!(f, "A")?,
            r => write!(f, "{r}")?,
        }
        let suit = match self.suit {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };
        write!(f, "{suit}")
    }
}
