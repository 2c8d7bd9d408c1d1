//! BoardView: maps the game model into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn straight from the cell regions computed by
//! `GameModel::relayout`, so rendering and hit-testing always agree on
//! where a cell is.

use crate::core::GameModel;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use tui_tictactoe_types::{Player, Point, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, marks, hover focus, and the game-over overlay.
pub struct BoardView {
    background: CellStyle,
    grid: CellStyle,
    red_mark: CellStyle,
    blue_mark: CellStyle,
    red_focus: CellStyle,
    blue_focus: CellStyle,
    win_line: CellStyle,
    message: CellStyle,
    hint: CellStyle,
}

impl Default for BoardView {
    fn default() -> Self {
        let base = CellStyle::default();
        Self {
            background: CellStyle {
                fg: Rgb::new(90, 90, 100),
                ..base
            },
            grid: CellStyle {
                fg: Rgb::new(120, 120, 130),
                ..base
            },
            red_mark: CellStyle {
                fg: Rgb::new(220, 80, 80),
                bold: true,
                ..base
            },
            blue_mark: CellStyle {
                fg: Rgb::new(80, 120, 220),
                bold: true,
                ..base
            },
            red_focus: CellStyle {
                fg: Rgb::new(255, 110, 110),
                bold: true,
                ..base
            },
            blue_focus: CellStyle {
                fg: Rgb::new(110, 150, 255),
                bold: true,
                ..base
            },
            win_line: CellStyle {
                fg: Rgb::new(240, 220, 80),
                bold: true,
                ..base
            },
            message: CellStyle {
                fg: Rgb::new(255, 255, 255),
                bold: true,
                ..base
            },
            hint: CellStyle {
                fg: Rgb::new(160, 160, 160),
                dim: true,
                ..base
            },
        }
    }
}

impl BoardView {
    /// Render the current game state into a framebuffer.
    ///
    /// `hover` is the last pointer position reported by the event loop;
    /// it only drives the focus brackets and never reaches the model.
    pub fn render(&self, model: &GameModel, hover: Option<Point>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(self.background);

        let winning = model.winning_line();

        for (idx, cell) in model.cells().iter().enumerate() {
            let region = cell.region();
            let on_win_line = winning.is_some_and(|line| line.contains(&idx));
            let outline = if on_win_line { self.win_line } else { self.grid };
            fb.outline_rect(region, outline);

            if let Some(player) = cell.occupant() {
                let mut style = self.mark_style(player);
                if on_win_line {
                    style = self.win_line;
                }
                fb.put_char(
                    region.x + region.w / 2,
                    region.y + region.h / 2,
                    player.glyph(),
                    style,
                );
            }
        }

        if model.is_over() {
            self.draw_game_over(&mut fb, model, viewport);
        } else if let Some(point) = hover {
            if let Some(idx) = model.cell_at(point) {
                let region = model.cells()[idx].region();
                self.draw_focus(&mut fb, region, model.current_player());
            }
        }

        fb
    }

    fn mark_style(&self, player: Player) -> CellStyle {
        match player {
            Player::Red => self.red_mark,
            Player::Blue => self.blue_mark,
        }
    }

    /// Corner brackets on the hovered cell, in the color of the player
    /// whose mark a click would place. Arm length is a quarter of the
    /// shorter region side, as in the original pointer focus.
    fn draw_focus(&self, fb: &mut FrameBuffer, region: Rect, player: Player) {
        if region.w < 2 || region.h < 2 {
            return;
        }
        let style = match player {
            Player::Red => self.red_focus,
            Player::Blue => self.blue_focus,
        };
        let arm = (region.w.min(region.h) / 4).max(1);
        let (x0, y0) = (region.x, region.y);
        let (x1, y1) = (region.right() - 1, region.bottom() - 1);

        fb.hline(x0 + 1, y0, arm, '━', style);
        fb.vline(x0, y0 + 1, arm, '┃', style);
        fb.hline(x1 - arm, y0, arm, '━', style);
        fb.vline(x1, y0 + 1, arm, '┃', style);
        fb.hline(x0 + 1, y1, arm, '━', style);
        fb.vline(x0, y1 - arm, arm, '┃', style);
        fb.hline(x1 - arm, y1, arm, '━', style);
        fb.vline(x1, y1 - arm, arm, '┃', style);

        fb.put_char(x0, y0, '┏', style);
        fb.put_char(x1, y0, '┓', style);
        fb.put_char(x0, y1, '┗', style);
        fb.put_char(x1, y1, '┛', style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, model: &GameModel, viewport: Viewport) {
        let message = model.result_message();
        let msg_w = message.chars().count() as i32;
        let x = (viewport.width as i32 - msg_w) / 2;
        let y = viewport.height as i32 / 2;
        fb.put_str(x, y, message, self.message);

        let hint = "press space to restart";
        let hint_w = hint.chars().count() as i32;
        fb.put_str(
            viewport.width as i32 - hint_w - 1,
            viewport.height as i32 - 2,
            hint,
            self.hint,
        );
    }
}
