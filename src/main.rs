//! Terminal 2048 runner (default binary).
//!
//! Event-driven: the loop blocks on the next terminal event, applies it to
//! the game in full, then redraws. Rendering only reads a snapshot.
//! On GAME OVER the board stays up (and follows resizes) until a key press.

use std::io::IsTerminal;

use anyhow::Result;
use crossterm::event;
use log::info;

use tui_2048::config::{Config, USAGE};
use tui_2048::core::GameState;
use tui_2048::session::{game_over_step, playing_step, screen_log_level, Step};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How a session ended.
enum Outcome {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    colog::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let seed = config.resolve_seed();
    info!("starting game with seed {}", seed);
    let mut game = GameState::new(seed);

    let requested = log::max_level();
    log::set_max_level(screen_log_level(requested, std::io::stderr().is_terminal()));

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::set_max_level(requested);
    let outcome = result?;

    match outcome {
        Outcome::GameOver => println!("Game Over! Final Score: {}", game.score()),
        Outcome::Quit => println!("Final Score: {}", game.score()),
    }
    info!(
        "session over after {} moves, score {}, best tile {}",
        game.moves(),
        game.score(),
        game.max_tile()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<Outcome> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let event = event::read()?;
        let step = if game.game_over() {
            game_over_step(&event)
        } else {
            playing_step(game, &event)
        };
        match step {
            Step::Quit if game.game_over() => return Ok(Outcome::GameOver),
            Step::Quit => return Ok(Outcome::Quit),
            Step::Resize => term.invalidate(),
            Step::Continue => {}
        }
    }
}
