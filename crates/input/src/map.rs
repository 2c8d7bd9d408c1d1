//! Mapping from terminal events to game actions and pointer events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, Point, PointerEvent};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map mouse input to pointer events.
///
/// Only the primary button places a mark; motion drives the hover
/// preview. Everything else (other buttons, drag, scroll, release) is
/// ignored.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let point = Point::new(mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Clicked(point)),
        MouseEventKind::Moved => Some(PointerEvent::Moved(point)),
        _ => None,
    }
}
