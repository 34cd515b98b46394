//! Error type of the keymap.
//!
//! Authoring mistakes in the compiled keymap are rejected at build time by
//! [`validate_keymap`](crate::keymap::validate_keymap). The remaining variants are
//! what a caller can still hit with runtime-provided input.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// A `(layer, row, col)` outside of the keymap
    OutOfBounds { layer: usize, row: usize, col: usize },
    /// The default layer must define every position, nothing can be below it
    TransparentOnBaseLayer { row: usize, col: usize },
    /// A layer key activates a layer that doesn't exist
    InvalidLayer { layer: usize, row: usize, col: usize, target: u8 },
    /// Encoding or decoding the keymap image failed
    Image(ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    BufferTooSmall,
    Corrupted,
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::OutOfBounds { layer, row, col } => {
                write!(f, "Position ({}, {}) on layer {} is outside of the keymap", row, col, layer)
            }
            KeymapError::TransparentOnBaseLayer { row, col } => {
                write!(f, "Transparent key at ({}, {}) on the base layer", row, col)
            }
            KeymapError::InvalidLayer { layer, row, col, target } => {
                write!(
                    f,
                    "Key at ({}, {}) on layer {} activates layer {}, which doesn't exist",
                    row, col, layer, target
                )
            }
            KeymapError::Image(ImageError::BufferTooSmall) => write!(f, "Buffer too small for the keymap image"),
            KeymapError::Image(ImageError::Corrupted) => write!(f, "Keymap image is corrupted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeymapError {}

impl From<postcard::Error> for KeymapError {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull => KeymapError::Image(ImageError::BufferTooSmall),
            _ => KeymapError::Image(ImageError::Corrupted),
        }
    }
}

/// Result type alias for keymap operations
pub type KeymapResult<T> = Result<T, KeymapError>;
