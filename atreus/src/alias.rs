//! Shortcuts and shifted symbols used by the Atreus layers.
//!
//! Each alias is a key sent together with a modifier combination, so the keymap
//! can say `PIPE` instead of `Shift + Backslash`.

use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{shifted, wm};

const CTRL: ModifierCombination = ModifierCombination::LCTRL;
const CTRL_SHIFT: ModifierCombination = ModifierCombination::LCTRL.union(ModifierCombination::LSHIFT);

// Editing shortcuts
pub const SAVE: KeyAction = wm!(S, CTRL);
pub const CLOSE: KeyAction = wm!(W, CTRL);
pub const OPEN: KeyAction = wm!(O, CTRL);
pub const COPY: KeyAction = wm!(C, CTRL);
pub const CUT: KeyAction = wm!(X, CTRL);
pub const PASTE: KeyAction = wm!(V, CTRL);
pub const UNDO: KeyAction = wm!(Z, CTRL);
pub const REDO: KeyAction = wm!(Z, CTRL_SHIFT);

// Shifted symbols
pub const EXLM: KeyAction = shifted!(Kc1);
pub const AT: KeyAction = shifted!(Kc2);
pub const HASH: KeyAction = shifted!(Kc3);
pub const DLR: KeyAction = shifted!(Kc4);
pub const PERC: KeyAction = shifted!(Kc5);
pub const CIRC: KeyAction = shifted!(Kc6);
pub const AMPR: KeyAction = shifted!(Kc7);
pub const ASTR: KeyAction = shifted!(Kc8);
pub const LPRN: KeyAction = shifted!(Kc9);
pub const RPRN: KeyAction = shifted!(Kc0);
pub const UNDS: KeyAction = shifted!(Minus);
pub const PLUS: KeyAction = shifted!(Equal);
pub const COLN: KeyAction = shifted!(Semicolon);
pub const QUES: KeyAction = shifted!(Slash);
pub const TILD: KeyAction = shifted!(Grave);
pub const PIPE: KeyAction = shifted!(Backslash);
pub const LCBR: KeyAction = shifted!(LeftBracket);
pub const RCBR: KeyAction = shifted!(RightBracket);
pub const DQT: KeyAction = shifted!(Quote);
pub const LABK: KeyAction = shifted!(Comma);
pub const RABK: KeyAction = shifted!(Dot);

// Zoom and tab switching
/// Ctrl + `+`, `+` itself being Shift + `=`
pub const ZOOM_IN: KeyAction = wm!(Equal, CTRL_SHIFT);
pub const ZOOM_OUT: KeyAction = wm!(Minus, CTRL);
pub const NEXT_TAB: KeyAction = wm!(PageUp, CTRL);
pub const PREV_TAB: KeyAction = wm!(PageDown, CTRL);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::action::Action;
    use crate::types::keycode::{HidKeyCode, KeyCode};

    fn parts(action: KeyAction) -> (HidKeyCode, ModifierCombination) {
        match action {
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Hid(k), m)) => (k, m),
            _ => panic!("alias isn't a key with modifier: {:?}", action),
        }
    }

    #[test]
    fn test_redo_is_ctrl_shift_z() {
        let (key, m) = parts(REDO);
        assert_eq!(key, HidKeyCode::Z);
        assert!(m.ctrl() && m.shift());
        assert!(!m.alt() && !m.gui() && !m.right());
    }

    #[test]
    fn test_symbols_are_left_shifted() {
        for alias in [
            EXLM, AT, HASH, DLR, PERC, CIRC, AMPR, ASTR, LPRN, RPRN, UNDS, PLUS, COLN, QUES, TILD, PIPE, LCBR, RCBR,
            DQT, LABK, RABK,
        ] {
            let (_, m) = parts(alias);
            assert_eq!(m, ModifierCombination::LSHIFT);
        }
        assert_eq!(parts(PIPE).0, HidKeyCode::Backslash);
        assert_eq!(parts(LABK).0, HidKeyCode::Comma);
    }

    #[test]
    fn test_shortcuts_use_left_ctrl() {
        for alias in [SAVE, CLOSE, OPEN, COPY, CUT, PASTE, UNDO, ZOOM_OUT, NEXT_TAB, PREV_TAB] {
            let (_, m) = parts(alias);
            assert_eq!(m, ModifierCombination::LCTRL);
        }
        assert_eq!(parts(SAVE).0, HidKeyCode::S);
        assert_eq!(parts(NEXT_TAB).0, HidKeyCode::PageUp);
        assert_eq!(parts(ZOOM_IN), (HidKeyCode::Equal, CTRL_SHIFT));
    }
}
