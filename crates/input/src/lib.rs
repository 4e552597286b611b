//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Direction`] values and
//! quit requests. Every other key is ignored by the game.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
