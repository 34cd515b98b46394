use heapless::Vec;

use crate::error::{KeymapError, KeymapResult};
use crate::types::action::KeyAction;

/// Which layers are currently active.
///
/// The keymap doesn't own it: whoever processes key events keeps one and passes it
/// to [`KeyMap::resolve_active`], so resolution is a plain function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerState<const NUM_LAYER: usize> {
    /// Momentary/toggled state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number, always active
    default_layer: u8,
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    pub const fn new() -> Self {
        Self {
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
        }
    }

    /// Get the default layer number
    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.default_layer = layer_num;
        }
    }

    /// The default layer counts as active
    pub fn is_active(&self, layer_num: u8) -> bool {
        layer_num == self.default_layer || self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = true;
        }
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = false;
        }
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
        }
    }

    /// The layer with the highest priority among the active ones
    pub fn highest_active(&self) -> u8 {
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.is_active(layer_idx as u8) {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    /// Active layers in resolution order: highest first, ending with the default layer.
    /// Layers below the default layer are never consulted.
    pub fn active_layers(&self) -> Vec<u8, NUM_LAYER> {
        let mut layers = Vec::new();
        for layer_idx in (0..NUM_LAYER).rev() {
            let layer_num = layer_idx as u8;
            if self.is_active(layer_num) {
                // Capacity is NUM_LAYER, it can't overflow
                let _ = layers.push(layer_num);
            }
            if layer_num == self.default_layer {
                break;
            }
        }
        layers
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }
}

/// Keymap represents the stack of layers.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// `(layer, row, col)` is used to retrieve the action from the keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Layer each pressed key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn layers(&self) -> &'a [[[KeyAction; COL]; ROW]; NUM_LAYER] {
        self.layers
    }

    /// Fetch the action at the given position of one layer, without looking at other layers.
    ///
    /// Panics if the position is outside of the keymap, use [`KeyMap::try_resolve`] for unchecked input.
    pub fn resolve(&self, layer_num: usize, row: usize, col: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    pub fn try_resolve(&self, layer_num: usize, row: usize, col: usize) -> KeymapResult<KeyAction> {
        self.layers
            .get(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(KeymapError::OutOfBounds {
                layer: layer_num,
                row,
                col,
            })
    }

    /// Resolve the action at a position against the active layers.
    ///
    /// Returns the action and the layer it was found on. `Transparent` falls through
    /// to the next active layer below, the lowest checked layer is the default layer.
    pub fn resolve_with_layer(&self, state: &LayerState<NUM_LAYER>, row: usize, col: usize) -> Option<(KeyAction, u8)> {
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) is outside of the keymap", row, col);
            return None;
        }
        for layer_num in state.active_layers() {
            let action = self.layers[layer_num as usize][row][col];
            if action == KeyAction::Transparent {
                continue;
            }
            return Some((action, layer_num));
        }
        None
    }

    /// Resolve the action at a position against the active layers
    pub fn resolve_active(&self, state: &LayerState<NUM_LAYER>, row: usize, col: usize) -> KeyAction {
        self.resolve_with_layer(state, row, col)
            .map_or(KeyAction::No, |(action, _)| action)
    }

    /// Resolve a key press and remember the layer the action came from
    pub fn resolve_press(&mut self, state: &LayerState<NUM_LAYER>, row: usize, col: usize) -> KeyAction {
        match self.resolve_with_layer(state, row, col) {
            Some((action, layer_num)) => {
                self.layer_cache[row][col] = layer_num;
                action
            }
            None => KeyAction::No,
        }
    }

    /// Resolve a key release with the layer saved at press.
    ///
    /// Releasing a layer key before the keys pressed on that layer must still release
    /// what was pressed, not whatever the lower layer has at the same position.
    pub fn resolve_release(&mut self, state: &LayerState<NUM_LAYER>, row: usize, col: usize) -> KeyAction {
        if row >= ROW || col >= COL {
            return KeyAction::No;
        }
        let layer_num = self.layer_cache[row][col];
        self.layer_cache[row][col] = state.default_layer();
        self.layers[layer_num as usize][row][col]
    }
}

/// Check a keymap for authoring errors.
///
/// - the base layer (layer 0) can't contain `Transparent`, there's nothing below it
/// - layer keys must target an existing layer
///
/// It's a `const fn`, so a compiled keymap is checked at build time.
pub const fn validate_keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    layers: &[[[KeyAction; COL]; ROW]; NUM_LAYER],
) -> Result<(), KeymapError> {
    let mut layer = 0;
    while layer < NUM_LAYER {
        let mut row = 0;
        while row < ROW {
            let mut col = 0;
            while col < COL {
                let action = &layers[layer][row][col];
                if layer == 0 && action.is_transparent() {
                    return Err(KeymapError::TransparentOnBaseLayer { row, col });
                }
                if let Some(target) = action.target_layer() {
                    if target as usize >= NUM_LAYER {
                        return Err(KeymapError::InvalidLayer { layer, row, col, target });
                    }
                }
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{a, k, lt, mo};

    #[rustfmt::skip]
    static KEYMAP: [[[KeyAction; 2]; 1]; 3] = [
        [[k!(A), lt!(1, B)]],
        [[a!(Transparent), k!(C)]],
        [[k!(D), a!(Transparent)]],
    ];

    #[test]
    fn test_transparent_falls_through() {
        let keymap = KeyMap::new(&KEYMAP);
        let mut state = LayerState::<3>::new();
        state.activate_layer(1);
        assert_eq!(keymap.resolve_active(&state, 0, 0), k!(A));
        assert_eq!(keymap.resolve_active(&state, 0, 1), k!(C));

        state.activate_layer(2);
        assert_eq!(keymap.resolve_active(&state, 0, 0), k!(D));
        // Layer 2 transparent, layer 1 has C
        assert_eq!(keymap.resolve_active(&state, 0, 1), k!(C));
        assert_eq!(keymap.resolve_with_layer(&state, 0, 1), Some((k!(C), 1)));
    }

    #[test]
    fn test_layers_below_default_are_skipped() {
        let keymap = KeyMap::new(&KEYMAP);
        let mut state = LayerState::<3>::new();
        state.set_default_layer(1);
        assert_eq!(state.active_layers().as_slice(), &[1]);
        // Nothing below the default layer, transparent resolves to nothing
        assert_eq!(keymap.resolve_active(&state, 0, 0), KeyAction::No);
    }

    #[test]
    fn test_invalid_layers_are_ignored() {
        let mut state = LayerState::<3>::new();
        state.activate_layer(3);
        state.toggle_layer(200);
        state.set_default_layer(5);
        assert_eq!(state, LayerState::<3>::new());
        assert_eq!(state.highest_active(), 0);
    }

    #[test]
    fn test_toggle_and_highest_active() {
        let mut state = LayerState::<3>::new();
        state.toggle_layer(2);
        assert!(state.is_active(2));
        assert_eq!(state.highest_active(), 2);
        assert_eq!(state.active_layers().as_slice(), &[2, 0]);
        state.toggle_layer(2);
        assert!(!state.is_active(2));
        assert_eq!(state.highest_active(), 0);
    }

    #[test]
    fn test_layer_cache_on_release() {
        let mut keymap = KeyMap::new(&KEYMAP);
        let mut state = LayerState::<3>::new();
        state.activate_layer(2);
        assert_eq!(keymap.resolve_press(&state, 0, 0), k!(D));
        // The layer key is released before the key itself
        state.deactivate_layer(2);
        assert_eq!(keymap.resolve_release(&state, 0, 0), k!(D));
        // Cache restored
        assert_eq!(keymap.resolve_release(&state, 0, 0), k!(A));
    }

    #[test]
    fn test_try_resolve_bounds() {
        let keymap = KeyMap::new(&KEYMAP);
        assert_eq!(keymap.try_resolve(2, 0, 0), Ok(k!(D)));
        assert_eq!(
            keymap.try_resolve(3, 0, 0),
            Err(KeymapError::OutOfBounds { layer: 3, row: 0, col: 0 })
        );
        assert!(keymap.try_resolve(0, 1, 0).is_err());
        assert!(keymap.try_resolve(0, 0, 2).is_err());
        assert_eq!(keymap.resolve_active(&LayerState::new(), 4, 4), KeyAction::No);
    }

    #[test]
    fn test_validate_keymap() {
        assert_eq!(validate_keymap(&KEYMAP), Ok(()));

        let transparent_base = [[[k!(A), a!(Transparent)]]];
        assert_eq!(
            validate_keymap(&transparent_base),
            Err(KeymapError::TransparentOnBaseLayer { row: 0, col: 1 })
        );

        let dangling_layer = [[[k!(A), mo!(4)]], [[a!(Transparent), a!(Transparent)]]];
        assert_eq!(
            validate_keymap(&dangling_layer),
            Err(KeymapError::InvalidLayer {
                layer: 0,
                row: 0,
                col: 1,
                target: 4
            })
        );
    }
}
