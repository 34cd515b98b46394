//! Keymap image, the compiled layers encoded with postcard.
//!
//! Cells are written one after another in `layer, row, col` order. The shape isn't
//! stored, reader and writer share `ROW`, `COL` and `NUM_LAYER`.
//!
//! Host tools read this instead of linking against the firmware tables.

use crate::error::{ImageError, KeymapError, KeymapResult};
use crate::types::action::KeyAction;

/// Encode all layers into `buffer`, returns the used part of the buffer
pub fn encode_keymap<'b, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    layers: &[[[KeyAction; COL]; ROW]; NUM_LAYER],
    buffer: &'b mut [u8],
) -> KeymapResult<&'b mut [u8]> {
    let mut offset = 0;
    for layer in layers {
        for row in layer {
            for action in row {
                offset += postcard::to_slice(action, &mut buffer[offset..])?.len();
            }
        }
    }
    debug!("Encoded keymap image, {} bytes", offset);
    Ok(&mut buffer[..offset])
}

/// Decode an image produced by [`encode_keymap`]
pub fn decode_keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    image: &[u8],
) -> KeymapResult<[[[KeyAction; COL]; ROW]; NUM_LAYER]> {
    let mut layers = [[[KeyAction::No; COL]; ROW]; NUM_LAYER];
    let mut remaining = image;
    for layer in layers.iter_mut() {
        for row in layer.iter_mut() {
            for action in row.iter_mut() {
                let (decoded, rest) = postcard::take_from_bytes::<KeyAction>(remaining)?;
                *action = decoded;
                remaining = rest;
            }
        }
    }
    if !remaining.is_empty() {
        warn!("Keymap image has {} trailing bytes", remaining.len());
        return Err(KeymapError::Image(ImageError::Corrupted));
    }
    Ok(layers)
}
