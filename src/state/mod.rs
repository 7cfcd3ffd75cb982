//! Dungeon state: the per-node snapshot and its canonical key.
//!
//! ## Key Types
//!
//! - `DungeonState`: health, deck, room table, weapon + kill stack,
//!   per-room counters
//! - `StateKey`: collision-free canonical encoding for the visited set

pub mod dungeon;
pub mod key;

pub use dungeon::{DungeonState, MAX_HP, ROOM_INTERACTIONS, TABLE_SLOTS};
pub use key::StateKey;
