//! Terminal input mapping.
//!
//! Translates `crossterm` keyboard and mouse events into the game's
//! [`GameAction`](crate::types::GameAction) and
//! [`PointerEvent`](crate::types::PointerEvent) types. No game logic
//! lives here; the event loop decides what an event means for the
//! model (e.g. restart is only honored once the game is over).

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
