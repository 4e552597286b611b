use tui_2048::core::{Board, GameState};
use tui_2048::term::{tile_color, GameView, Viewport};

fn snapshot_of(rows: [[u32; 4]; 4]) -> tui_2048::core::GameSnapshot {
    GameState::from_board(1, Board::from_rows(rows)).snapshot()
}

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4x8 tiles + 5x2 gaps = 42 wide, 4x3 tiles + 5x1 gaps = 17 high, plus border.
    let fb = view.render(&snap, Viewport::new(44, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(43, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(43, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_values_in_tiles() {
    let snap = snapshot_of([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    let fb = GameView::default().render(&snap, Viewport::new(44, 19));

    // Tile (0,0) starts at (3,2); its middle row is y=3.
    assert_eq!(fb.get(6, 3).unwrap().ch, '2');
    assert_eq!(fb.get(3, 2).unwrap().style.bg, tile_color(2));

    // Tile (3,3) starts at (33,14); "2048" is centred on y=15.
    let row = fb.row_text(15);
    assert_eq!(&row.chars().skip(35).take(4).collect::<String>(), "2048");
    assert_eq!(fb.get(33, 14).unwrap().style.bg, tile_color(2048));
}

#[test]
fn term_view_empty_tiles_use_empty_color() {
    let snap = snapshot_of([[0; 4]; 4]);
    let fb = GameView::default().render(&snap, Viewport::new(44, 19));
    assert_eq!(fb.get(3, 2).unwrap().style.bg, tile_color(0));
    assert!(!all_text(&fb).chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.moves = 56;

    let fb = GameView::default().render(&snap, Viewport::new(74, 19));
    let all = all_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("56"));

    let narrow = GameView::default().render(&snap, Viewport::new(44, 19));
    assert!(!all_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let over = snapshot_of([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(over.game_over);
    let fb = GameView::default().render(&over, Viewport::new(44, 19));
    assert!(all_text(&fb).contains("GAME OVER"));

    let live = snapshot_of([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&live, Viewport::new(44, 19));
    assert!(!all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameState::new(3).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
