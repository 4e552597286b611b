//! Board tests - spawning and game-over detection

use tui_2048::core::{Board, SimpleRng};
use tui_2048::types::GRID_SIZE;

const CHECKER: [[u32; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

const DISTINCT: [[u32; 4]; 4] = [
    [2, 4, 8, 16],
    [32, 64, 128, 256],
    [512, 1024, 2048, 4096],
    [8192, 16384, 32768, 65536],
];

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), GRID_SIZE);
    assert_eq!(board.empty_count(), GRID_SIZE * GRID_SIZE);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(board.get(row, col), Some(0));
        }
    }
}

#[test]
fn test_spawn_adds_exactly_one_tile() {
    let mut rng = SimpleRng::new(1);
    let mut board = Board::new();
    for placed in 1..=GRID_SIZE * GRID_SIZE {
        let before = board.cells();
        let spawned = board.spawn_tile(&mut rng).expect("board has room");
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(before[spawned.row][spawned.col], 0);
        assert_eq!(board.empty_count(), GRID_SIZE * GRID_SIZE - placed);

        // Only the spawned cell differs.
        let diffs = before
            .iter()
            .flatten()
            .zip(board.cells().iter().flatten())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(diffs, 1);
    }
    assert_eq!(board.spawn_tile(&mut rng), None);
}

#[test]
fn test_spawn_value_distribution() {
    let mut rng = SimpleRng::new(2024);
    let mut fours = 0;
    for _ in 0..5000 {
        let mut board = Board::new();
        if board.spawn_tile(&mut rng).unwrap().value == 4 {
            fours += 1;
        }
    }
    assert!((350..650).contains(&fours), "fours: {}", fours);
}

#[test]
fn test_spawn_position_is_spread() {
    let mut rng = SimpleRng::new(5);
    let mut hits = [[0u32; 4]; 4];
    for _ in 0..3200 {
        let mut board = Board::new();
        let s = board.spawn_tile(&mut rng).unwrap();
        hits[s.row][s.col] += 1;
    }
    for count in hits.iter().flatten() {
        assert!((100..300).contains(count), "hits: {:?}", hits);
    }
}

#[test]
fn test_game_over_on_checkerboard() {
    assert!(Board::from_rows(CHECKER).is_game_over());
}

#[test]
fn test_not_over_with_empty_cell() {
    let mut rows = CHECKER;
    rows[3][3] = 0;
    assert!(!Board::from_rows(rows).is_game_over());
}

#[test]
fn test_not_over_with_horizontal_pair() {
    let mut rows = DISTINCT;
    rows[2][3] = 2048;
    assert!(!Board::from_rows(rows).is_game_over());
}

#[test]
fn test_not_over_with_vertical_pair() {
    let mut rows = DISTINCT;
    rows[1][0] = 2;
    assert!(!Board::from_rows(rows).is_game_over());
}

#[test]
fn test_not_over_with_pair_in_last_row() {
    let mut rows = DISTINCT;
    rows[3][3] = 32768;
    assert!(!Board::from_rows(rows).is_game_over());
}

#[test]
fn test_distinct_full_board_is_over() {
    assert!(Board::from_rows(DISTINCT).is_game_over());
}
