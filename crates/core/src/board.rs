//! Board module - owns the 4x4 tile grid
//!
//! Coordinates are `(row, col)`, row 0 at the top and col 0 at the left.
//! The board knows nothing about moves or score; it only stores tiles,
//! places new ones and answers whether any merge or shift is still possible.

use arrayvec::ArrayVec;
use log::trace;

use crate::rng::SimpleRng;
use crate::types::{
    Grid, Tile, CELL_COUNT, GRID_SIZE, SPAWN_FOUR_PERCENT, SPAWN_HIGH, SPAWN_LOW,
};

/// A tile placed by [`Board::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// The game board - 4 rows x 4 columns of tile values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a board from explicit rows.
    pub fn from_rows(cells: Grid) -> Self {
        Self { cells }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get tile at `(row, col)`, or None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set tile at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Copy of the whole grid.
    pub fn cells(&self) -> Grid {
        self.cells
    }

    /// Borrow the grid rows.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    pub(crate) fn replace(&mut self, cells: Grid) {
        self.cells = cells;
    }

    /// Positions of all empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board (0 when empty).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// A full board is left untouched and `None` is returned.
    pub fn spawn_tile(&mut self, rng: &mut SimpleRng) -> Option<Spawned> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            trace!("spawn skipped: board full");
            return None;
        }

        let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
        let value = if rng.chance(SPAWN_FOUR_PERCENT) {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        };
        self.cells[row][col] = value;
        Some(Spawned { row, col, value })
    }

    /// True when the board is full and no two axis-adjacent tiles match.
    ///
    /// Each cell is compared with the neighbour above and the neighbour to
    /// the left only, so every adjacent pair is visited exactly once.
    pub fn is_game_over(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    return false;
                }
                if row > 0 && value == self.cells[row - 1][col] {
                    return false;
                }
                if col > 0 && value == self.cells[row][col - 1] {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
