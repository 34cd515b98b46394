//! The Atreus programmer layout.
//!
//! Letters are QWERTY. The most common non-letter characters when writing code sit on
//! the easiest to reach positions of the symbol layer, and cursor movement has its own
//! layer, so that hands stay on the home row. All layers are momentary: holding
//! `S`, `D`, `K` or `L` activates the number, function key, cursor or symbol layer.
//!
//! The matrix has 4 rows and 12 columns. The top three rows have five keys per
//! hand, matrix columns 5 and 6 are only populated on the thumb row.

use crate::alias::*;
use crate::dual_role::DualRole;
use crate::keymap::{KeyMap, validate_keymap};
use crate::types::action::KeyAction;
use crate::{a, func, k, layer};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 5;

/// Hold time deciding between tap and hold of dual-role keys
pub const TAPPING_TERM_MS: u64 = 300;

// Each layer gets a name for readability, which is then used in the keymap matrix below.
pub const ALPH: u8 = 0;
pub const NUMS: u8 = 1;
pub const FKEY: u8 = 2;
pub const CURS: u8 = 3;
pub const SYMB: u8 = 4;

const TRNS: KeyAction = a!(Transparent);
const NO: KeyAction = a!(No);

const FN_NUMS: KeyAction = DualRole::Nums.key_action();
const FN_FKEY: KeyAction = DualRole::Fkey.key_action();
const FN_CURS: KeyAction = DualRole::Curs.key_action();
const FN_SYMB: KeyAction = DualRole::Symb.key_action();
const FN_ALBS: KeyAction = DualRole::Albs.key_action();
const FN_CTDL: KeyAction = DualRole::Ctdl.key_action();
const FN_SFSP: KeyAction = DualRole::Sfsp.key_action();
const FN_SFET: KeyAction = DualRole::Sfet.key_action();
const FN_SUTB: KeyAction = DualRole::Sutb.key_action();
const FN_CTES: KeyAction = DualRole::Ctes.key_action();
const FN_BOOT: KeyAction = func!(Bootloader);

#[rustfmt::skip]
pub const DEFAULT_KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // ALPH
    layer!([
        [k!(Q),   k!(W),        k!(E),        k!(R),        k!(T),   NO,      NO,      k!(Y),   k!(U),   k!(I),     k!(O),   k!(P)],
        [k!(A),   FN_NUMS,      FN_FKEY,      k!(F),        k!(G),   NO,      NO,      k!(H),   k!(J),   FN_CURS,   FN_SYMB, k!(Semicolon)],
        [k!(Z),   k!(X),        k!(C),        k!(V),        k!(B),   NO,      NO,      k!(N),   k!(M),   k!(Comma), k!(Dot), k!(Slash)],
        [FN_SUTB, k!(LeftBracket), LCBR,      LPRN,         FN_SFSP, FN_CTES, FN_ALBS, FN_SFET, RPRN,    RCBR,      k!(RightBracket), FN_CTDL]
    ]),
    // NUMS
    layer!([
        [TRNS,    TRNS,         TRNS,         ASTR,         k!(Slash),     NO,   NO,   TRNS,    k!(Kc7), k!(Kc8),   k!(Kc9), k!(Slash)],
        [TRNS,    TRNS,         k!(Equal),    PLUS,         k!(Minus),     NO,   NO,   LPRN,    k!(Kc4), k!(Kc5),   k!(Kc6), ASTR],
        [TRNS,    TRNS,         k!(Dot),      k!(Comma),    k!(Semicolon), NO,   NO,   RPRN,    k!(Kc1), k!(Kc2),   k!(Kc3), k!(Minus)],
        [TRNS,    TRNS,         TRNS,         TRNS,         TRNS,          TRNS, TRNS, TRNS,    k!(Kc0), k!(Dot),   k!(Equal), PLUS]
    ]),
    // FKEY
    layer!([
        [TRNS,    TRNS,         TRNS,         TRNS,         TRNS,    NO,      NO,      TRNS,    k!(F9),  k!(F10),   k!(F11), k!(F12)],
        [TRNS,    TRNS,         TRNS,         TRNS,         TRNS,    NO,      NO,      TRNS,    k!(F5),  k!(F6),    k!(F7),  k!(F8)],
        [TRNS,    TRNS,         TRNS,         TRNS,         TRNS,    NO,      NO,      TRNS,    k!(F1),  k!(F2),    k!(F3),  k!(F4)],
        [TRNS,    TRNS,         TRNS,         TRNS,         TRNS,    TRNS,    TRNS,    TRNS,    TRNS,    TRNS,      TRNS,    TRNS]
    ]),
    // CURS
    layer!([
        [k!(Home), k!(Backspace), k!(Up),     k!(Delete),   k!(PageUp),   NO,  NO,  TRNS,    SAVE,     TRNS,     OPEN,    ZOOM_IN],
        [k!(End),  k!(Left),    k!(Down),     k!(Right),    k!(PageDown), NO,  NO,  UNDO,    k!(LAlt), TRNS,     k!(LGui), ZOOM_OUT],
        [NEXT_TAB, k!(AudioVolDown), k!(AudioMute), k!(AudioVolUp), k!(MediaPlayPause), NO, NO, REDO, CLOSE, TRNS, TRNS, TRNS],
        [PREV_TAB, TRNS,        FN_BOOT,      k!(Grave),    k!(Tab),      COPY, CUT, PASTE,  TRNS,     TRNS,     TRNS,    TRNS]
    ]),
    // SYMB
    layer!([
        [k!(Backslash), EXLM,   LABK,         RABK,         COLN,          NO,   NO,   UNDS,      DLR,       QUES,  TRNS, PERC],
        [AT,      AMPR,         LPRN,         RPRN,         k!(Semicolon), NO,   NO,   k!(Comma), k!(Dot),   k!(Quote), TRNS, TILD],
        [HASH,    PIPE,         LCBR,         RCBR,         k!(Slash),     NO,   NO,   k!(Minus), k!(Grave), DQT,   TRNS, CIRC],
        [TRNS,    TRNS,         k!(LeftBracket), k!(RightBracket), TRNS,   TRNS, TRNS, TRNS,      TRNS,      TRNS,  TRNS, TRNS]
    ]),
];

const _: () = assert!(
    validate_keymap(&DEFAULT_KEYMAP).is_ok(),
    "Atreus keymap has a transparent key on the base layer or a layer key to a missing layer"
);

/// The compiled keymap, the table the firmware links against
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = DEFAULT_KEYMAP;

pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    DEFAULT_KEYMAP
}

/// A [`KeyMap`] over the compiled Atreus layers
pub fn keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER> {
    KeyMap::new(&KEYMAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::LayerState;
    use crate::types::action::Action;
    use crate::types::function::FunctionId;

    #[test]
    fn test_blank_matrix_positions() {
        let keymap = keymap();
        for layer in 0..NUM_LAYER {
            for row in 0..3 {
                assert_eq!(keymap.resolve(layer, row, 5), KeyAction::No);
                assert_eq!(keymap.resolve(layer, row, 6), KeyAction::No);
            }
        }
        // Thumb row uses every column
        assert_eq!(keymap.resolve(0, 3, 5), FN_CTES);
        assert_eq!(keymap.resolve(0, 3, 6), FN_ALBS);
    }

    #[test]
    fn test_home_row_layer_keys() {
        let keymap = keymap();
        assert_eq!(keymap.resolve(0, 1, 1).target_layer(), Some(NUMS));
        assert_eq!(keymap.resolve(0, 1, 2).target_layer(), Some(FKEY));
        assert_eq!(keymap.resolve(0, 1, 9).target_layer(), Some(CURS));
        assert_eq!(keymap.resolve(0, 1, 10).target_layer(), Some(SYMB));
    }

    #[test]
    fn test_function_keys_grouping() {
        let keymap = keymap();
        let mut state = LayerState::<NUM_LAYER>::new();
        state.activate_layer(FKEY);
        assert_eq!(keymap.resolve_active(&state, 2, 8), k!(F1));
        assert_eq!(keymap.resolve_active(&state, 1, 8), k!(F5));
        assert_eq!(keymap.resolve_active(&state, 0, 8), k!(F9));
        assert_eq!(keymap.resolve_active(&state, 0, 11), k!(F12));
        // Left hand untouched
        assert_eq!(keymap.resolve_active(&state, 0, 0), k!(Q));
    }

    #[test]
    fn test_bootloader_key() {
        let keymap = keymap();
        let mut state = LayerState::<NUM_LAYER>::new();
        state.activate_layer(CURS);
        assert_eq!(
            keymap.resolve_active(&state, 3, 2),
            KeyAction::Single(Action::Function(FunctionId::Bootloader))
        );
        // Only reachable from the cursor layer
        for layer in 0..NUM_LAYER {
            if layer as u8 == CURS {
                continue;
            }
            assert_ne!(keymap.resolve(layer, 3, 2), FN_BOOT);
        }
    }

    #[test]
    fn test_get_default_keymap() {
        assert_eq!(get_default_keymap(), KEYMAP);
    }
}
