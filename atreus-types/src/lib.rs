//! # Atreus Types
//!
//! This crate provides the type vocabulary used by the Atreus keymap.
//!
//! ## Modules
//!
//! - [`action`] - Keyboard actions and behaviors (key presses, layer activation, tap/hold, functions)
//! - [`keycode`] - HID keycodes
//! - [`modifier`] - Modifier key combinations
//! - [`function`] - Identifiers of the functions a key can invoke
//!
//! The `atreus` crate builds the keymap tables and the resolution logic on top of these types.

#![no_std]

pub mod action;
pub mod function;
pub mod keycode;
pub mod modifier;
