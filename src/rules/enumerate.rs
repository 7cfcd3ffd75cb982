//! Legal-action enumeration.
//!
//! Pure function of the state. Generation order is deterministic (flee
//! first, then slot order with fist before weapon) so searches replay
//! identically, but the order carries no other meaning.

use smallvec::SmallVec;

use crate::cards::Role;
use crate::state::DungeonState;

use super::action::Action;

/// Actions lists fit inline: at most flee + 2 per slot.
pub type ActionList = SmallVec<[Action; 16]>;

/// Whether the equipped weapon may be used against an enemy of `rank`.
///
/// Weapon kills must strictly decrease in rank; a fresh weapon (empty
/// kill stack) can hit anything.
pub(crate) fn weapon_allows(state: &DungeonState, rank: u8) -> bool {
    state.weapon_rank > 0 && state.weapon_kills.last().map_or(true, |&top| rank < top)
}

/// List every legal action in the given state.
#[must_use]
pub fn legal_actions(state: &DungeonState) -> ActionList {
    let mut actions = ActionList::new();

    // Flee: only before any interaction this room, never twice in a row,
    // and only while the room has cards to return.
    if state.interactions_this_room == 0 && !state.fled_last_room && !state.table_is_empty() {
        actions.push(Action::Flee);
    }

    for (idx, slot) in state.table.iter().enumerate() {
        let Some(card) = slot else { continue };
        let slot = idx as u8;

        match card.role() {
            Role::Enemy => {
                actions.push(Action::FightFist { slot });
                if weapon_allows(state, card.rank) {
                    actions.push(Action::FightWeapon { slot });
                }
            }
            Role::Weapon => actions.push(Action::EquipWeapon { slot }),
            Role::RepairToolkit => actions.push(Action::UseToolkit { slot }),
            Role::HealingPotion | Role::PoisonPotion => {
                actions.push(Action::DrinkPotion { slot });
            }
        }
    }

    actions
}
