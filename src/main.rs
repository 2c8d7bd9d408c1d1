//! Terminal tic-tac-toe runner.
//!
//! Blocking, event-driven loop: every state change happens synchronously
//! in response to one pointer or key event, and the screen is redrawn
//! only when a mutating call reports success (or the hovered cell
//! changes).

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameModel;
use tui_tictactoe::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_tictactoe::term::{BoardView, TerminalRenderer, Viewport};
use tui_tictactoe::types::{GameAction, Point, PointerEvent};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let mut model = GameModel::new();
    model.relayout(w as i32, h as i32);

    let view = BoardView::default();
    let mut hover: Option<Point> = None;

    term.draw(&view.render(&model, hover, viewport))?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(GameAction::Restart) = handle_key_event(key) {
                    // Restart is only honored once the game is over.
                    if model.is_over() {
                        model.restart();
                        term.draw(&view.render(&model, hover, viewport))?;
                    }
                }
            }
            Event::Mouse(mouse) => match handle_mouse_event(mouse) {
                Some(PointerEvent::Clicked(point)) => {
                    if model.click(point) {
                        term.draw(&view.render(&model, hover, viewport))?;
                    }
                }
                Some(PointerEvent::Moved(point)) => {
                    let before = hover.and_then(|p| model.cell_at(p));
                    let after = model.cell_at(point);
                    hover = Some(point);
                    if before != after {
                        term.draw(&view.render(&model, hover, viewport))?;
                    }
                }
                None => {}
            },
            Event::Resize(new_w, new_h) => {
                viewport = Viewport::new(new_w, new_h);
                model.relayout(new_w as i32, new_h as i32);
                // Stale hover coordinates may point at the old layout.
                hover = None;
                term.draw(&view.render(&model, hover, viewport))?;
            }
            _ => {}
        }
    }
}
