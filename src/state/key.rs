//! Canonical state keys for the search's visited set.
//!
//! A `StateKey` is a compact byte encoding of every field that makes two
//! dungeon states behave identically. Equal states always produce equal
//! keys, and any difference in a tracked field changes the key, so the
//! visited set can use plain byte equality instead of a lossy hash.
//!
//! ## Layout
//!
//! ```text
//! [hp, weapon_rank, flags, interactions,
//!  kills_len, kills...,
//!  table[0..4]  (card codes, 0 = empty slot),
//!  deck_len, deck... (bottom to top)]
//! ```
//!
//! `flags` packs `potion_used_this_room` (bit 0) and `fled_last_room`
//! (bit 1). Variable-length sections are length-prefixed, and card codes
//! use the `cards` bijection with `0` reserved for "no card", so no two
//! distinct states can serialize to the same bytes.

use crate::state::dungeon::DungeonState;

/// Collision-free canonical encoding of a [`DungeonState`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    /// Encode a state into its canonical key.
    #[must_use]
    pub fn of(state: &DungeonState) -> Self {
        let mut bytes = Vec::with_capacity(10 + state.weapon_kills.len() + state.deck_len());

        bytes.push(state.hp);
        bytes.push(state.weapon_rank);

        let flags =
            u8::from(state.potion_used_this_room) | (u8::from(state.fled_last_room) << 1);
        bytes.push(flags);
        bytes.push(state.interactions_this_room);

        bytes.push(state.weapon_kills.len() as u8);
        bytes.extend_from_slice(&state.weapon_kills);

        for slot in &state.table {
            bytes.push(slot.map_or(0, |c| c.encode()));
        }

        debug_assert!(state.deck_len() <= u8::MAX as usize);
        bytes.push(state.deck_len() as u8);
        bytes.extend(state.deck_cards().map(|c| c.encode()));

        Self(bytes.into_boxed_slice())
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
