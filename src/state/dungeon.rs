//! The complete dungeon snapshot and its construction/terminal rules.
//!
//! ## DungeonState
//!
//! One value per search node: health, draw deck, 4-slot room table,
//! equipped weapon + kill stack, and per-room bookkeeping. States are
//! immutable snapshots from the search's point of view: applying an
//! action clones the parent and mutates the clone, never the parent.
//!
//! Uses an `im::Vector` for the deck so cloning a state is cheap; the
//! search forks a state at every expanded node.
//!
//! ## Deck orientation
//!
//! The deck is an explicit double-ended sequence. The *back* of the
//! vector is the top (the draw end); the front is the bottom, where
//! fled cards are returned. The last card of the slice handed to
//! [`DungeonState::initial`] is therefore the first card drawn.

use im::Vector;
use smallvec::SmallVec;

use crate::cards::Card;

/// Starting and maximum health.
pub const MAX_HP: u8 = 20;

/// Number of card slots in a room.
pub const TABLE_SLOTS: usize = 4;

/// Interactions that end a room and trigger a redraw.
pub const ROOM_INTERACTIONS: u8 = 3;

/// Full dungeon state for one search node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonState {
    /// Health, clamped to `0..=20`. `0` means dead.
    pub hp: u8,

    /// Draw deck; back = top (draw end), front = bottom (flee return end).
    deck: Vector<Card>,

    /// The room: four optional card slots.
    pub table: [Option<Card>; TABLE_SLOTS],

    /// Rank of the equipped weapon; `0` = bare-handed.
    pub weapon_rank: u8,

    /// Ranks of enemies killed with the current weapon, most recent last.
    /// Cleared on equip. Non-empty only while `weapon_rank > 0`.
    pub weapon_kills: SmallVec<[u8; 8]>,

    /// A potion already took effect in this room.
    pub potion_used_this_room: bool,

    /// Cards resolved in this room so far, `0..=3`.
    pub interactions_this_room: u8,

    /// The previous room was fled; blocks fleeing twice in a row.
    pub fled_last_room: bool,
}

impl DungeonState {
    /// Build the initial state from a caller-shuffled deck.
    ///
    /// When `include_special` is false, special-rank Hearts/Diamonds
    /// (poison potions and repair toolkits) are filtered out first.
    /// `starting_hp` is clamped to [`MAX_HP`]. The first room is drawn
    /// immediately.
    #[must_use]
    pub fn initial(deck: &[Card], include_special: bool, starting_hp: u8) -> Self {
        let deck: Vector<Card> = deck
            .iter()
            .copied()
            .filter(|c| include_special || !c.is_special())
            .collect();

        let mut state = Self {
            hp: starting_hp.min(MAX_HP),
            deck,
            table: [None; TABLE_SLOTS],
            weapon_rank: 0,
            weapon_kills: SmallVec::new(),
            potion_used_this_room: false,
            interactions_this_room: 0,
            fled_last_room: false,
        };
        state.refill_table();
        state
    }

    // === Terminal checks ===

    /// Alive with the whole dungeon consumed.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.hp > 0 && self.deck.is_empty() && self.table_is_empty()
    }

    /// Health exhausted.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    // === Deck (double-ended sequence) ===

    /// Draw the top card, if any.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.deck.pop_back()
    }

    /// Return a card underneath everything else (flee).
    pub fn return_to_bottom(&mut self, card: Card) {
        self.deck.push_front(card);
    }

    /// Cards remaining in the draw deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Deck cards from bottom to top, for canonical key encoding.
    pub fn deck_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck.iter().copied()
    }

    // === Table ===

    /// True when no table slot holds a card.
    #[must_use]
    pub fn table_is_empty(&self) -> bool {
        self.table.iter().all(Option::is_none)
    }

    /// Fill every empty table slot from the deck top, as far as the
    /// deck allows.
    pub fn refill_table(&mut self) {
        for i in 0..TABLE_SLOTS {
            if self.table[i].is_none() {
                self.table[i] = self.draw_top();
            }
        }
    }
}
