//! Dual-role keys of the Atreus keymap.
//!
//! Each dual-role key sends a key when tapped, and activates a layer or applies a
//! modifier when held. All of them share the tapping threshold in
//! [`TapHoldConfig`](crate::config::TapHoldConfig).

use strum::FromRepr;

use crate::layout::{CURS, FKEY, NUMS, SYMB};
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::{HidKeyCode, KeyCode};
use crate::types::modifier::ModifierCombination;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DualRole {
    /// `S`, or the number layer
    Nums = 1,
    /// `D`, or the function key layer
    Fkey = 2,
    /// `K`, or the cursor layer
    Curs = 3,
    /// `L`, or the symbol layer
    Symb = 4,
    /// Backspace, or Alt
    Albs = 5,
    /// Delete, or Control
    Ctdl = 6,
    /// Space, or left Shift
    Sfsp = 7,
    /// Enter, or right Shift
    Sfet = 8,
    /// Tab, or Gui
    Sutb = 9,
    /// Escape, or right Control
    Ctes = 10,
}

/// Every dual-role binding, in id order
pub const DUAL_ROLE_TABLE: [DualRole; 10] = [
    DualRole::Nums,
    DualRole::Fkey,
    DualRole::Curs,
    DualRole::Symb,
    DualRole::Albs,
    DualRole::Ctdl,
    DualRole::Sfsp,
    DualRole::Sfet,
    DualRole::Sutb,
    DualRole::Ctes,
];

impl DualRole {
    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_repr(id)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// `(tap, hold)` actions of the binding
    pub const fn binding(self) -> (Action, Action) {
        match self {
            DualRole::Nums => (tap(HidKeyCode::S), Action::LayerOn(NUMS)),
            DualRole::Fkey => (tap(HidKeyCode::D), Action::LayerOn(FKEY)),
            DualRole::Curs => (tap(HidKeyCode::K), Action::LayerOn(CURS)),
            DualRole::Symb => (tap(HidKeyCode::L), Action::LayerOn(SYMB)),
            DualRole::Albs => (tap(HidKeyCode::Backspace), Action::Modifier(ModifierCombination::LALT)),
            DualRole::Ctdl => (tap(HidKeyCode::Delete), Action::Modifier(ModifierCombination::LCTRL)),
            DualRole::Sfsp => (tap(HidKeyCode::Space), Action::Modifier(ModifierCombination::LSHIFT)),
            DualRole::Sfet => (tap(HidKeyCode::Enter), Action::Modifier(ModifierCombination::RSHIFT)),
            DualRole::Sutb => (tap(HidKeyCode::Tab), Action::Modifier(ModifierCombination::LGUI)),
            DualRole::Ctes => (tap(HidKeyCode::Escape), Action::Modifier(ModifierCombination::RCTRL)),
        }
    }

    /// The `TapHold` action placed in the keymap
    pub const fn key_action(self) -> KeyAction {
        let (tap, hold) = self.binding();
        KeyAction::TapHold(tap, hold)
    }

    /// Find the binding whose tap-hold action is `key_action`
    pub fn from_key_action(key_action: KeyAction) -> Option<Self> {
        DUAL_ROLE_TABLE.into_iter().find(|d| d.key_action() == key_action)
    }
}

/// `(tap, hold)` of the binding with the raw id, `None` if the id isn't a dual-role key
pub fn resolve(id: u8) -> Option<(Action, Action)> {
    DualRole::from_id(id).map(DualRole::binding)
}

const fn tap(key: HidKeyCode) -> Action {
    Action::Key(KeyCode::Hid(key))
}
