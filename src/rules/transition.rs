//! The transition engine: apply one action to a state.
//!
//! `apply` never mutates its input; every branch works on a private
//! clone and returns an [`Outcome`]. Terminal win/dead are ordinary
//! return values, not errors. An action that fails its precondition
//! (which the enumerator never produces) yields `Outcome::Invalid`
//! instead of corrupting state.
//!
//! ## Room advance
//!
//! Every non-flee action that survives runs the shared room-advance
//! step: count the interaction, declare a win if the dungeon is fully
//! consumed, and otherwise redraw the room once three interactions have
//! resolved or the table has run dry.

use crate::cards::{Card, Role};
use crate::state::{DungeonState, MAX_HP, ROOM_INTERACTIONS};

use super::action::Action;
use super::enumerate::weapon_allows;

/// Poison potions always deal a flat 10.
const POISON_DAMAGE: u8 = 10;

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The dungeon continues from this successor state.
    Continue(DungeonState),
    /// Full exhaustion while alive. `bonus` is the healing rank of a
    /// last-card healing potion, `0` for a plain exhaustion win.
    Won { bonus: u8 },
    /// Health reached zero.
    Dead,
    /// Precondition failed; no successor. Unreachable through the
    /// enumerator's action set.
    Invalid,
}

/// Apply `action` to `state`, producing a successor or a terminal.
#[must_use]
pub fn apply(state: &DungeonState, action: Action) -> Outcome {
    match action {
        Action::Flee => flee(state),
        Action::FightFist { slot } => fight(state, slot, false),
        Action::FightWeapon { slot } => fight(state, slot, true),
        Action::EquipWeapon { slot } => equip(state, slot),
        Action::UseToolkit { slot } => toolkit(state, slot),
        Action::DrinkPotion { slot } => drink(state, slot),
    }
}

/// Fetch the card in `slot` if it exists and has the expected role.
fn card_at(state: &DungeonState, slot: u8, role: Role) -> Option<Card> {
    state
        .table
        .get(slot as usize)
        .copied()
        .flatten()
        .filter(|c| c.role() == role)
}

fn flee(state: &DungeonState) -> Outcome {
    if state.interactions_this_room != 0 || state.fled_last_room || state.table_is_empty() {
        return Outcome::Invalid;
    }

    let mut next = state.clone();
    // Reverse slot order, each card appended below the previous bottom.
    for slot in (0..next.table.len()).rev() {
        if let Some(card) = next.table[slot].take() {
            next.return_to_bottom(card);
        }
    }
    next.refill_table();
    next.interactions_this_room = 0;
    next.potion_used_this_room = false;
    next.fled_last_room = true;
    Outcome::Continue(next)
}

fn fight(state: &DungeonState, slot: u8, with_weapon: bool) -> Outcome {
    let Some(enemy) = card_at(state, slot, Role::Enemy) else {
        return Outcome::Invalid;
    };
    if with_weapon && !weapon_allows(state, enemy.rank) {
        return Outcome::Invalid;
    }

    let damage = if with_weapon {
        enemy.rank.saturating_sub(state.weapon_rank)
    } else {
        enemy.rank
    };
    if damage >= state.hp {
        return Outcome::Dead;
    }

    let mut next = state.clone();
    next.hp -= damage;
    if with_weapon {
        next.weapon_kills.push(enemy.rank);
    }
    next.table[slot as usize] = None;
    advance(next)
}

fn equip(state: &DungeonState, slot: u8) -> Outcome {
    let Some(weapon) = card_at(state, slot, Role::Weapon) else {
        return Outcome::Invalid;
    };

    let mut next = state.clone();
    next.weapon_rank = weapon.rank;
    next.weapon_kills.clear();
    next.table[slot as usize] = None;
    advance(next)
}

fn toolkit(state: &DungeonState, slot: u8) -> Outcome {
    if card_at(state, slot, Role::RepairToolkit).is_none() {
        return Outcome::Invalid;
    }

    let mut next = state.clone();
    // No weapon or no kills: the toolkit is consumed with no effect.
    next.weapon_kills.pop();
    next.table[slot as usize] = None;
    advance(next)
}

fn drink(state: &DungeonState, slot: u8) -> Outcome {
    let card = match card_at(state, slot, Role::HealingPotion)
        .or_else(|| card_at(state, slot, Role::PoisonPotion))
    {
        Some(c) => c,
        None => return Outcome::Invalid,
    };

    let mut next = state.clone();
    next.table[slot as usize] = None;

    // Last card in the entire dungeon: a healing potion ends the game
    // immediately with its rank as a bonus. Checked before the
    // once-per-room rule.
    if card.role() == Role::HealingPotion && next.deck_is_empty() && next.table_is_empty() {
        return Outcome::Won { bonus: card.rank };
    }

    if next.potion_used_this_room {
        // Fizzle: the card is consumed with no effect, and the
        // already-set flag stays set.
        return advance(next);
    }
    next.potion_used_this_room = true;

    match card.role() {
        Role::PoisonPotion => {
            if next.hp <= POISON_DAMAGE {
                return Outcome::Dead;
            }
            next.hp -= POISON_DAMAGE;
        }
        Role::HealingPotion => {
            next.hp = (next.hp + card.rank).min(MAX_HP);
        }
        _ => unreachable!("drink only reaches potion roles"),
    }
    advance(next)
}

/// Shared post-interaction step for every surviving non-flee action.
fn advance(mut next: DungeonState) -> Outcome {
    next.interactions_this_room += 1;

    if next.deck_is_empty() && next.table_is_empty() {
        return Outcome::Won { bonus: 0 };
    }

    if next.interactions_this_room >= ROOM_INTERACTIONS || next.table_is_empty() {
        next.refill_table();
        next.interactions_this_room = 0;
        next.potion_used_this_room = false;
        next.fled_last_room = false;
    }

    Outcome::Continue(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn enemy(rank: u8) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn state_with(deck: &[Card], table: [Option<Card>; 4]) -> DungeonState {
        let mut state = DungeonState::initial(&[], true, 20);
        for &card in deck {
            // Each push goes under the previous, so the first card
            // listed is the top and gets drawn first.
            state.return_to_bottom(card);
        }
        state.table = table;
        state
    }

    fn continued(outcome: Outcome) -> DungeonState {
        match outcome {
            Outcome::Continue(next) => next,
            other => panic!("expected Continue, got {other:?}"),
        }
    }

    #[test]
    fn test_fist_takes_full_rank() {
        let state = state_with(
            &[enemy(2)],
            [Some(enemy(9)), Some(enemy(3)), None, None],
        );
        let next = continued(apply(&state, Action::FightFist { slot: 0 }));

        assert_eq!(next.hp, 11);
        assert_eq!(next.table[0], None);
        assert_eq!(next.interactions_this_room, 1);
        assert!(next.weapon_kills.is_empty());
    }

    #[test]
    fn test_fist_death_is_terminal() {
        let mut state = state_with(&[], [Some(enemy(14)), Some(enemy(2)), None, None]);
        state.hp = 14;

        assert_eq!(apply(&state, Action::FightFist { slot: 0 }), Outcome::Dead);
    }

    #[test]
    fn test_weapon_reduces_damage_with_floor_zero() {
        let mut state = state_with(
            &[enemy(2)],
            [Some(enemy(9)), Some(enemy(4)), None, None],
        );
        state.weapon_rank = 6;

        let next = continued(apply(&state, Action::FightWeapon { slot: 0 }));
        assert_eq!(next.hp, 17);
        assert_eq!(next.weapon_kills.as_slice(), &[9]);

        // Weapon outranks the enemy entirely: zero damage.
        let strong = continued(apply(&next, Action::FightWeapon { slot: 1 }));
        assert_eq!(strong.hp, 17);
        assert_eq!(strong.weapon_kills.as_slice(), &[9, 4]);
    }

    #[test]
    fn test_weapon_fight_out_of_order_is_invalid() {
        let mut state = state_with(&[enemy(2)], [Some(enemy(9)), None, None, None]);
        state.weapon_rank = 5;
        state.weapon_kills.push(7);

        assert_eq!(
            apply(&state, Action::FightWeapon { slot: 0 }),
            Outcome::Invalid
        );
    }

    #[test]
    fn test_fight_empty_slot_is_invalid() {
        let state = state_with(&[enemy(2)], [None, Some(enemy(3)), None, None]);
        assert_eq!(apply(&state, Action::FightFist { slot: 0 }), Outcome::Invalid);
        assert_eq!(apply(&state, Action::FightFist { slot: 9 }), Outcome::Invalid);
    }

    #[test]
    fn test_equip_resets_kill_stack() {
        let mut state = state_with(
            &[enemy(2)],
            [Some(Card::new(Suit::Diamonds, 8)), Some(enemy(3)), None, None],
        );
        state.weapon_rank = 4;
        state.weapon_kills.extend_from_slice(&[10, 6]);

        let next = continued(apply(&state, Action::EquipWeapon { slot: 0 }));
        assert_eq!(next.weapon_rank, 8);
        assert!(next.weapon_kills.is_empty());
        assert_eq!(next.table[0], None);
    }

    #[test]
    fn test_toolkit_pops_latest_kill() {
        let mut state = state_with(
            &[enemy(2)],
            [Some(Card::new(Suit::Diamonds, 12)), Some(enemy(3)), None, None],
        );
        state.weapon_rank = 9;
        state.weapon_kills.extend_from_slice(&[8, 5]);

        let next = continued(apply(&state, Action::UseToolkit { slot: 0 }));
        assert_eq!(next.weapon_kills.as_slice(), &[8]);
    }

    #[test]
    fn test_toolkit_without_kills_is_a_plain_discard() {
        let state = state_with(
            &[enemy(2)],
            [Some(Card::new(Suit::Diamonds, 14)), Some(enemy(3)), None, None],
        );
        let next = continued(apply(&state, Action::UseToolkit { slot: 0 }));

        assert!(next.weapon_kills.is_empty());
        assert_eq!(next.table[0], None);
        assert_eq!(next.interactions_this_room, 1);
    }

    #[test]
    fn test_healing_potion_heals_and_clamps() {
        let mut state = state_with(
            &[enemy(2)],
            [
                Some(Card::new(Suit::Hearts, 7)),
                Some(Card::new(Suit::Hearts, 9)),
                Some(enemy(3)),
                None,
            ],
        );
        state.hp = 10;

        let next = continued(apply(&state, Action::DrinkPotion { slot: 0 }));
        assert_eq!(next.hp, 17);
        assert!(next.potion_used_this_room);

        // Clamp at 20 from a fresh room.
        let mut near_full = state.clone();
        near_full.hp = 19;
        let clamped = continued(apply(&near_full, Action::DrinkPotion { slot: 1 }));
        assert_eq!(clamped.hp, MAX_HP);
    }

    #[test]
    fn test_second_potion_fizzles_but_is_consumed() {
        let mut state = state_with(
            &[enemy(2)],
            [
                Some(Card::new(Suit::Hearts, 5)),
                Some(enemy(3)),
                None,
                None,
            ],
        );
        state.hp = 10;
        state.potion_used_this_room = true;
        state.interactions_this_room = 1;

        let next = continued(apply(&state, Action::DrinkPotion { slot: 0 }));
        assert_eq!(next.hp, 10);
        assert_eq!(next.table[0], None);
        assert_eq!(next.interactions_this_room, 2);
    }

    #[test]
    fn fizzled_potion_keeps_room_flag() {
        let mut state = state_with(
            &[enemy(2)],
            [
                Some(Card::new(Suit::Hearts, 5)),
                Some(enemy(3)),
                None,
                None,
            ],
        );
        state.potion_used_this_room = true;

        let next = continued(apply(&state, Action::DrinkPotion { slot: 0 }));
        assert!(next.potion_used_this_room);
    }

    #[test]
    fn test_poison_damage_and_death() {
        let mut state = state_with(
            &[enemy(2)],
            [Some(Card::new(Suit::Hearts, 12)), Some(enemy(3)), None, None],
        );

        let next = continued(apply(&state, Action::DrinkPotion { slot: 0 }));
        assert_eq!(next.hp, 10);

        state.hp = 10;
        assert_eq!(apply(&state, Action::DrinkPotion { slot: 0 }), Outcome::Dead);
    }

    #[test]
    fn test_last_card_healing_potion_wins_with_bonus() {
        let state = state_with(&[], [Some(Card::new(Suit::Hearts, 8)), None, None, None]);
        assert_eq!(
            apply(&state, Action::DrinkPotion { slot: 0 }),
            Outcome::Won { bonus: 8 }
        );
    }

    #[test]
    fn test_last_card_bonus_beats_the_fizzle_rule() {
        let mut state = state_with(&[], [Some(Card::new(Suit::Hearts, 8)), None, None, None]);
        state.potion_used_this_room = true;

        assert_eq!(
            apply(&state, Action::DrinkPotion { slot: 0 }),
            Outcome::Won { bonus: 8 }
        );
    }

    #[test]
    fn test_last_card_poison_gets_no_bonus() {
        let mut state = state_with(&[], [Some(Card::new(Suit::Hearts, 11)), None, None, None]);
        state.hp = 20;

        // Survives the poison, then wins by plain exhaustion.
        assert_eq!(
            apply(&state, Action::DrinkPotion { slot: 0 }),
            Outcome::Won { bonus: 0 }
        );
    }

    #[test]
    fn test_flee_rotates_room_to_deck_bottom() {
        let c = |rank| enemy(rank);
        let state = state_with(
            &[c(2), c(3), c(4), c(5)],
            [Some(c(6)), Some(c(7)), Some(c(8)), Some(c(9))],
        );

        let next = continued(apply(&state, Action::Flee));
        assert!(next.fled_last_room);
        assert_eq!(next.interactions_this_room, 0);
        // Redraw takes the old deck top first.
        let table_ranks: Vec<u8> = next.table.iter().flatten().map(|c| c.rank).collect();
        assert_eq!(table_ranks, vec![2, 3, 4, 5]);
        // Fled cards sit at the bottom, below the old deck.
        assert_eq!(next.deck_len(), 4);
        let deck_ranks: Vec<u8> = next.deck_cards().map(|c| c.rank).collect();
        assert_eq!(deck_ranks, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_flee_after_interaction_is_invalid() {
        let mut state = state_with(&[enemy(2)], [Some(enemy(3)), None, None, None]);
        state.interactions_this_room = 1;
        assert_eq!(apply(&state, Action::Flee), Outcome::Invalid);

        let mut fled = state_with(&[enemy(2)], [Some(enemy(3)), None, None, None]);
        fled.fled_last_room = true;
        assert_eq!(apply(&fled, Action::Flee), Outcome::Invalid);
    }

    #[test]
    fn test_third_interaction_redraws_the_room() {
        let state = state_with(
            &[enemy(2), enemy(4)],
            [Some(enemy(3)), Some(enemy(5)), Some(enemy(6)), None],
        );
        let mut current = state;
        current.interactions_this_room = 2;
        current.potion_used_this_room = true;
        current.fled_last_room = true;

        let next = continued(apply(&current, Action::FightFist { slot: 0 }));
        // Room boundary fired: counters reset, empty slots refilled.
        assert_eq!(next.interactions_this_room, 0);
        assert!(!next.potion_used_this_room);
        assert!(!next.fled_last_room);
        assert_eq!(next.table.iter().flatten().count(), 4);
        assert!(next.deck_is_empty());
    }

    #[test]
    fn test_emptied_table_redraws_early() {
        let state = state_with(&[enemy(2)], [Some(enemy(3)), None, None, None]);
        let next = continued(apply(&state, Action::FightFist { slot: 0 }));

        // Only one interaction, but the table ran dry.
        assert_eq!(next.interactions_this_room, 0);
        assert_eq!(next.table.iter().flatten().count(), 1);
        assert!(next.deck_is_empty());
    }

    #[test]
    fn test_exhaustion_win() {
        let state = state_with(&[], [Some(enemy(3)), None, None, None]);
        assert_eq!(
            apply(&state, Action::FightFist { slot: 0 }),
            Outcome::Won { bonus: 0 }
        );
    }

    #[test]
    fn test_parent_state_is_never_mutated() {
        let state = state_with(&[enemy(2)], [Some(enemy(9)), Some(enemy(3)), None, None]);
        let snapshot = state.clone();

        let _ = apply(&state, Action::FightFist { slot: 0 });
        let _ = apply(&state, Action::Flee);

        assert_eq!(state, snapshot);
    }
}
