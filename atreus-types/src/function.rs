//! Functions a key can invoke.
//!
//! Every function has a stable numeric id so that a raw id coming from an
//! outer layer (e.g. a host tool) can be mapped back with [`FunctionId::from_id`].

use serde::{Deserialize, Serialize};
use strum::FromRepr;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FunctionId {
    /// Jump to the bootloader, so that a new firmware can be flashed
    Bootloader = 0,
}

impl FunctionId {
    /// Convert a raw function id, returns `None` for ids that aren't defined
    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_repr(id)
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_id() {
        assert_eq!(FunctionId::from_id(0), Some(FunctionId::Bootloader));
        assert_eq!(FunctionId::Bootloader.id(), 0);
        assert_eq!(FunctionId::from_id(1), None);
        assert_eq!(FunctionId::from_id(0xFF), None);
    }
}
