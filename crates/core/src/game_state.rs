//! Game state module - owns the board, score and RNG
//!
//! `GameState` is the single mutator of a game. A host event loop calls
//! [`GameState::apply_move`] once per directional input; everything that
//! follows a successful move (commit, spawn, game-over check) happens
//! inside that call before it returns.

use log::{debug, trace};

use crate::board::{Board, Spawned};
use crate::moves::{can_move, compute_move};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Grid, Tile, INITIAL_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    seed: u32,
    score: u32,
    /// Number of moves that changed the board.
    moves: u32,
    last_spawn: Option<Spawned>,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// Two tiles are placed before the game is returned.
    pub fn new(seed: u32) -> Self {
        let mut state = Self::from_board(seed, Board::new());
        for _ in 0..INITIAL_TILES {
            state.spawn_tile();
        }
        state.game_over = state.board.is_game_over();
        state
    }

    /// Start from an existing board without spawning anything.
    pub fn from_board(seed: u32, board: Board) -> Self {
        let game_over = board.is_game_over();
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            score: 0,
            moves: 0,
            last_spawn: None,
            game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> Grid {
        self.board.cells()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    /// Tile placed after the most recent changed move (or at setup).
    pub fn last_spawn(&self) -> Option<Spawned> {
        self.last_spawn
    }

    /// Directions that would change the board right now.
    pub fn legal_moves(&self) -> [bool; 4] {
        let grid = self.board.cells();
        Direction::ALL.map(|d| can_move(&grid, d))
    }

    /// Spawn a tile on a random empty cell.
    pub fn spawn_tile(&mut self) -> Option<Spawned> {
        let spawned = self.board.spawn_tile(&mut self.rng);
        if let Some(s) = spawned {
            debug!("spawned {} at ({}, {})", s.value, s.row, s.col);
        }
        self.last_spawn = spawned;
        spawned
    }

    /// Shift all tiles in `direction`.
    ///
    /// Returns true if the board changed. A changed move adds the merge
    /// score, spawns a tile and re-evaluates game over. Once the game is
    /// over every move is rejected.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            trace!("move {} ignored: game over", direction);
            return false;
        }

        let result = compute_move(self.board.rows(), direction);
        if !result.changed {
            trace!("move {} changed nothing", direction);
            return false;
        }

        self.board.replace(result.grid);
        self.score += result.score;
        self.moves += 1;
        debug!(
            "move {} #{}: +{} (score {})",
            direction, self.moves, result.score, self.score
        );

        self.spawn_tile();
        self.game_over = self.board.is_game_over();
        if self.game_over {
            debug!("game over after {} moves, score {}", self.moves, self.score);
        }
        true
    }

    /// Write a snapshot into an existing value.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.board.cells();
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.game_over = self.game_over;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
