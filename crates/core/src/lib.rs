//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the board, the move engine, and the
//! game state that ties them together. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function or method over values
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with tile spawning and game-over detection
//! - [`moves`]: shift-and-merge of a single line, generalized to four directions
//! - [`game_state`]: board + score + RNG, the single mutator of a game
//! - [`rng`]: seedable LCG used for tile placement
//! - [`snapshot`]: copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once
//! - Each merge adds the new tile's value to the score
//! - A move that changes the board spawns a 2 (90%) or a 4 (10%)
//! - The game ends when the board is full and no neighbours match
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::from_board(42, board);
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid()[0][0], 4);
//! ```

pub mod board;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Spawned};
pub use game_state::GameState;
pub use moves::{can_move, compute_move, line_cell, line_cells, merge_line, LineResult, MoveResult};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
