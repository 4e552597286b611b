//! Move engine - shift-and-merge for all four directions
//!
//! A move is applied to each of the four lines (rows for Left/Right,
//! columns for Up/Down) independently, in two passes:
//!
//! 1. Read the line in traversal order, starting at the edge the tiles
//!    move toward, and build the compacted/merged line ([`merge_line`]).
//! 2. Scatter the merged line back to the grid, noting whether any cell
//!    changed.
//!
//! Which grid cell sits at position `k` of a line is decided by
//! [`line_cell`] alone, so the merge itself never looks at the direction.

use crate::types::{Direction, Grid, Line, GRID_SIZE};

/// Outcome of merging a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult {
    pub line: Line,
    /// Sum of the tiles created by merges.
    pub score: u32,
}

/// Outcome of applying a direction to a whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// True if at least one cell differs from the input grid.
    pub changed: bool,
    /// Score gained by this move.
    pub score: u32,
}

/// Grid coordinates `(row, col)` of position `k` along line `line`.
///
/// Position 0 is the cell on the edge the tiles move toward; higher
/// positions walk away from it.
#[inline(always)]
pub fn line_cell(direction: Direction, line: usize, k: usize) -> (usize, usize) {
    let far = GRID_SIZE - 1 - k;
    match direction {
        Direction::Up => (k, line),
        Direction::Down => (far, line),
        Direction::Left => (line, k),
        Direction::Right => (line, far),
    }
}

/// All coordinates of line `line`, in traversal order.
pub fn line_cells(direction: Direction, line: usize) -> [(usize, usize); GRID_SIZE] {
    std::array::from_fn(|k| line_cell(direction, line, k))
}

/// Compact and merge one line toward index 0.
///
/// A tile produced by a merge is closed for the rest of the pass, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
pub fn merge_line(source: Line) -> LineResult {
    let mut out: Line = [0; GRID_SIZE];
    let mut cursor = 0usize;
    let mut score = 0u32;

    // The cursor never passes the last slot: every slot before it holds at
    // least one source tile.
    for value in source.into_iter().filter(|&v| v != 0) {
        if out[cursor] == value {
            out[cursor] *= 2;
            score += out[cursor];
            cursor += 1;
        } else if out[cursor] != 0 {
            cursor += 1;
            out[cursor] = value;
        } else {
            out[cursor] = value;
        }
    }

    LineResult { line: out, score }
}

/// Apply `direction` to `grid` without touching the original.
pub fn compute_move(grid: &Grid, direction: Direction) -> MoveResult {
    let mut next = *grid;
    let mut changed = false;
    let mut score = 0u32;

    for line in 0..GRID_SIZE {
        let cells = line_cells(direction, line);
        let merged = merge_line(cells.map(|(r, c)| grid[r][c]));
        score += merged.score;

        for (&(r, c), &value) in cells.iter().zip(merged.line.iter()) {
            if next[r][c] != value {
                changed = true;
            }
            next[r][c] = value;
        }
    }

    MoveResult {
        grid: next,
        changed,
        score,
    }
}

/// True if moving in `direction` would alter the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    compute_move(grid, direction).changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_cell_table() {
        assert_eq!(line_cells(Direction::Left, 1), [(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(line_cells(Direction::Right, 1), [(1, 3), (1, 2), (1, 1), (1, 0)]);
        assert_eq!(line_cells(Direction::Up, 2), [(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert_eq!(line_cells(Direction::Down, 2), [(3, 2), (2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_merge_line_cases() {
        let cases: [(Line, Line, u32); 9] = [
            ([2, 2, 0, 0], [4, 0, 0, 0], 4),
            ([2, 2, 2, 2], [4, 4, 0, 0], 8),
            ([2, 0, 2, 4], [4, 4, 0, 0], 4),
            ([0, 0, 0, 2], [2, 0, 0, 0], 0),
            ([4, 4, 8, 8], [8, 16, 0, 0], 24),
            ([2, 2, 4, 0], [4, 4, 0, 0], 4),
            ([2, 4, 8, 16], [2, 4, 8, 16], 0),
            ([8, 0, 0, 8], [16, 0, 0, 0], 16),
            ([0, 0, 0, 0], [0, 0, 0, 0], 0),
        ];
        for (input, expected, score) in cases {
            let got = merge_line(input);
            assert_eq!(got.line, expected, "merging {:?}", input);
            assert_eq!(got.score, score, "score for {:?}", input);
        }
    }

    #[test]
    fn test_merge_line_three_equal_merges_front_pair() {
        let got = merge_line([2, 2, 2, 0]);
        assert_eq!(got.line, [4, 2, 0, 0]);
        assert_eq!(got.score, 4);
    }

    #[test]
    fn test_compute_move_does_not_mutate_input() {
        let grid: Grid = [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
        let copy = grid;
        let result = compute_move(&grid, Direction::Left);
        assert_eq!(grid, copy);
        assert_eq!(result.grid[0], [4, 0, 0, 0]);
        assert!(result.changed);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_can_move() {
        let grid: Grid = [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]];
        assert!(!can_move(&grid, Direction::Right));
        assert!(!can_move(&grid, Direction::Up));
        assert!(can_move(&grid, Direction::Left));
        assert!(can_move(&grid, Direction::Down));
    }
}
