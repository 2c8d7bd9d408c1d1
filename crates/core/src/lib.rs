//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the complete tic-tac-toe state machine with
//! **zero dependencies** on UI or I/O:
//!
//! - [`cell`]: one board square (occupancy + hit-test region)
//! - [`model`]: the [`GameModel`] aggregate - turn alternation, move
//!   validation, and win/draw detection via bitmask matching
//!
//! # Win detection
//!
//! Each player's marks are tracked as a 9-bit mask over linear board
//! positions (`row * 3 + col`). After every accepted move the mover's
//! mask is tested against the eight fixed line patterns in
//! [`types::WIN_PATTERNS`]: the player wins iff `(pattern & mask) ==
//! pattern` for some pattern. The draw check (`move_count == 9`) runs
//! only when no pattern matched, so a winning final move is reported
//! as a win.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameModel, Outcome};
//! use tui_tictactoe_types::Player;
//!
//! let mut game = GameModel::new();
//! game.attempt_move(0, 0); // Red
//! game.attempt_move(1, 1); // Blue
//! game.attempt_move(0, 1); // Red
//! game.attempt_move(2, 2); // Blue
//! game.attempt_move(0, 2); // Red completes the top row
//!
//! assert!(game.is_over());
//! assert_eq!(game.outcome(), Some(Outcome::Win(Player::Red)));
//! ```

pub mod cell;
pub mod model;

pub use tui_tictactoe_types as types;

pub use cell::Cell;
pub use model::{GameModel, Outcome};
