//! Terminal rendering for the tic-tac-toe board.
//!
//! The view layer is split so the part worth testing stays pure:
//!
//! - [`fb`]: framebuffer of styled character cells with clipped drawing
//! - [`board_view`]: pure mapping from game state (+ hover point) to a
//!   framebuffer
//! - [`renderer`]: the only module that touches the terminal

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
