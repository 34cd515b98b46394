use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RCTRL: Self = Self::new().with_ctrl(true).with_right(true);
    pub const RSHIFT: Self = Self::new().with_shift(true).with_right(true);
    pub const RALT: Self = Self::new().with_alt(true).with_right(true);
    pub const RGUI: Self = Self::new().with_gui(true).with_right(true);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// `BitOr` isn't usable in const context, tables are built with this instead.
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    /// Returns `true` if no modifier is set. The L/R bit alone doesn't count.
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_side_modifiers() {
        let m = ModifierCombination::RSHIFT;
        assert!(m.shift());
        assert!(m.right());
        assert!(!m.ctrl());
        assert_eq!(m.into_bits(), 0b1_0010);
    }

    #[test]
    fn test_union_matches_bitor() {
        let a = ModifierCombination::LCTRL.union(ModifierCombination::LSHIFT);
        let b = ModifierCombination::LCTRL | ModifierCombination::LSHIFT;
        assert_eq!(a, b);
        assert!(a.ctrl() && a.shift());
        assert!(!a.right());
    }

    #[test]
    fn test_empty() {
        assert!(ModifierCombination::new().is_empty());
        assert!(ModifierCombination::new().with_right(true).is_empty());
        assert!(!ModifierCombination::LGUI.is_empty());
    }
}
