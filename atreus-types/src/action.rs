//! Keyboard actions and behaviors.
//!
//! Actions represent what happens when a key is pressed, from simple key
//! presses to dual-role (tap/hold) keys and function calls.
//!
//! Key types:
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - What a keymap cell holds, possibly a composite of two actions

use serde::{Deserialize, Serialize};

use crate::function::FunctionId;
use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer.
    /// Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` variant, returns `Action::No` for other variants.
    pub const fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub const fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub const fn is_tap_hold(&self) -> bool {
        matches!(self, KeyAction::TapHold(_, _))
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// The layer this key activates, either directly or when held.
    pub const fn target_layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(Action::LayerOn(l)) | KeyAction::TapHold(_, Action::LayerOn(l)) => Some(*l),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke
    Key(KeyCode),
    /// Modifier Combination, applied while the key is held
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Invoke a function
    Function(FunctionId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::HidKeyCode;

    #[test]
    fn test_target_layer() {
        let lt = KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::S)), Action::LayerOn(1));
        assert_eq!(lt.target_layer(), Some(1));
        assert_eq!(KeyAction::Single(Action::LayerOn(3)).target_layer(), Some(3));
        let mt = KeyAction::TapHold(
            Action::Key(KeyCode::Hid(HidKeyCode::Tab)),
            Action::Modifier(ModifierCombination::LGUI),
        );
        assert_eq!(mt.target_layer(), None);
        assert_eq!(KeyAction::Transparent.target_layer(), None);
    }

    #[test]
    fn test_to_action() {
        let a = Action::Function(FunctionId::Bootloader);
        assert_eq!(KeyAction::Single(a).to_action(), a);
        assert_eq!(KeyAction::Transparent.to_action(), Action::No);
        assert_eq!(KeyAction::TapHold(a, a).to_action(), Action::No);
    }

    #[test]
    fn test_serde_roundtrip_keeps_modifiers() {
        let action = KeyAction::Single(Action::KeyWithModifier(
            KeyCode::Hid(HidKeyCode::Z),
            ModifierCombination::LCTRL.union(ModifierCombination::LSHIFT),
        ));
        let bytes = postcard::to_allocvec(&action).unwrap();
        let decoded: KeyAction = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, action);
    }
}
