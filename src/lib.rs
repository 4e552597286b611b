//! TUI 2048 (workspace facade crate).
//!
//! Exposes `tui_2048::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub mod config;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
