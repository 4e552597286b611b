//! Per-event steps of the game loop, kept free of terminal I/O.

use crossterm::event::{Event, KeyEventKind};
use log::{debug, LevelFilter};

use crate::core::GameState;
use crate::input::{handle_key_event, should_quit};

/// What the loop does after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Draw the (possibly unchanged) state again.
    Continue,
    /// The terminal size changed; next draw must be a full redraw.
    Resize,
    /// Leave the loop.
    Quit,
}

/// Handle one event while the game is running.
pub fn playing_step(game: &mut GameState, event: &Event) -> Step {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                return Step::Quit;
            }
            if let Some(direction) = handle_key_event(*key) {
                if !game.apply_move(direction) {
                    debug!("{} rejected", direction);
                }
            }
            Step::Continue
        }
        Event::Resize(_, _) => Step::Resize,
        _ => Step::Continue,
    }
}

/// Handle one event while the GAME OVER screen is up: any key press ends
/// the session, a resize still redraws.
pub fn game_over_step(event: &Event) -> Step {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Step::Quit,
        Event::Resize(_, _) => Step::Resize,
        _ => Step::Continue,
    }
}

/// Log ceiling while the board owns the terminal.
///
/// Records written to a terminal stderr would land on top of the board, so
/// only `info` and above pass (nothing logs at those levels in the loop).
pub fn screen_log_level(requested: LevelFilter, stderr_is_terminal: bool) -> LevelFilter {
    if stderr_is_terminal {
        requested.min(LevelFilter::Info)
    } else {
        requested
    }
}
