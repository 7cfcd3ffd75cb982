//! Player actions.
//!
//! Actions are small copyable values: a verb plus, for everything except
//! `Flee`, the table slot it targets. Slots are indices into the 4-card
//! room table; the enumerator never emits an action for an empty slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One player decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Return the whole room to the deck bottom and redraw.
    Flee,
    /// Fight the enemy in `slot` bare-handed, taking its full rank.
    FightFist { slot: u8 },
    /// Fight the enemy in `slot` with the equipped weapon.
    FightWeapon { slot: u8 },
    /// Equip the weapon in `slot`, clearing the kill stack.
    EquipWeapon { slot: u8 },
    /// Consume the repair toolkit in `slot`, undoing the latest kill.
    UseToolkit { slot: u8 },
    /// Drink the potion in `slot`.
    DrinkPotion { slot: u8 },
}

impl Action {
    /// The table slot this action targets, if any.
    #[must_use]
    pub fn slot(self) -> Option<u8> {
        match self {
            Action::Flee => None,
            Action::FightFist { slot }
            | Action::FightWeapon { slot }
            | Action::EquipWeapon { slot }
            | Action::UseToolkit { slot }
            | Action::DrinkPotion { slot } => Some(slot),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Flee => write!(f, "flee"),
            Action::FightFist { slot } => write!(f, "fight slot {slot} bare-handed"),
            Action::FightWeapon { slot } => write!(f, "fight slot {slot} with weapon"),
            Action::EquipWeapon { slot } => write!(f, "equip weapon in slot {slot}"),
            Action::UseToolkit { slot } => write!(f, "use toolkit in slot {slot}"),
            Action::DrinkPotion { slot } => write!(f, "drink potion in slot {slot}"),
        }
    }
}
