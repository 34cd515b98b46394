//! # Atreus
//!
//! Programmer-oriented keymap for the Atreus keyboard, and the pieces needed to
//! interpret it: layer resolution with transparent fall-through, the dual-role
//! (tap/hold) table and its threshold, shortcut aliases and the bootloader function.
//!
//! Matrix scanning, HID reports and timing are left to the firmware running it.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub use atreus_types as types;

pub mod alias;
pub mod boot;
pub mod config;
pub mod dual_role;
pub mod error;
pub mod function;
pub mod image;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod tap_hold;
