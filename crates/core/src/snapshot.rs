use crate::types::{Grid, Tile, GRID_SIZE};

/// Read-only view of a game, copied out once per frame for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub moves: u32,
    pub max_tile: Tile,
    pub game_over: bool,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            moves: 0,
            max_tile: 0,
            game_over: false,
            seed: 0,
        }
    }
}
