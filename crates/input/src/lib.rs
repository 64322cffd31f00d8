//! Input: key events mapped to maze actions.
//!
//! # Invariants
//! - Events are edge-triggered; a key release never produces an action.
//! - The game loop only sees [`Action`] values.

pub mod action;
pub mod keymap;

pub use action::Action;
pub use keymap::{Key, KeyMap, UnknownKey};
