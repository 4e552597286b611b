//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders into a plain
//! framebuffer that is then flushed to the terminal, with no widget or
//! layout library in between.
//!
//! - [`game_view`] turns a [`core::GameSnapshot`] into a framebuffer (pure)
//! - [`palette`] maps tile values to colors
//! - [`renderer`] writes framebuffers to the terminal through crossterm

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameRect, GameView, Viewport};
pub use palette::{text_color, tile_color};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
