//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 matrix of tile values, indexed `[row][col]`
//! with `[0][0]` in the top-left corner:
//!
//! - `0` is an empty cell
//! - any other value is a tile, always a power of two (2, 4, 8, ...)
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed before the first move |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance that a spawned tile is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GRID_SIZE};
//!
//! let dir = Direction::Left;
//! assert_eq!(dir.as_str(), "left");
//! assert_eq!(dir.to_string(), "left");
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tiles spawned before the first input is accepted.
pub const INITIAL_TILES: usize = 2;

/// Percent chance that a spawned tile is a 4 instead of a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Value of the common spawn tile.
pub const SPAWN_LOW: u32 = 2;

/// Value of the rare spawn tile.
pub const SPAWN_HIGH: u32 = 4;

/// Tile value; 0 is an empty cell.
pub type Tile = u32;

/// One row or column of the board.
pub type Line = [Tile; GRID_SIZE];

/// Row-major grid, indexed `[row][col]`.
pub type Grid = [Line; GRID_SIZE];

/// Shift direction for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
