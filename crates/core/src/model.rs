//! Game model - the single mutable aggregate for one tic-tac-toe session.
//!
//! Holds the 3x3 grid, turn state, move count, per-player occupancy
//! bitmasks, and the terminal outcome. All operations are synchronous
//! total functions; invalid input (click outside the board, click on an
//! occupied cell, click after the game ended) is a no-op signaled by a
//! `false` return, never an error.

use crate::cell::Cell;
use tui_tictactoe_types::{Player, Point, Rect, CELL_COUNT, GRID_SIZE, WIN_PATTERNS};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Complete game state for one session.
///
/// Constructed once; [`GameModel::restart`] resets every field in place
/// (the regions assigned by the last [`GameModel::relayout`] survive a
/// restart, since the surface did not change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    /// Flat row-major grid, linear index `row * 3 + col`.
    cells: [Cell; CELL_COUNT],
    current: Player,
    move_count: u8,
    /// Bit `i` set iff Red occupies linear position `i`.
    red_mask: u16,
    /// Bit `i` set iff Blue occupies linear position `i`.
    blue_mask: u16,
    outcome: Option<Outcome>,
}

impl GameModel {
    /// Create a fresh game: empty board, Red to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::default(); CELL_COUNT],
            current: Player::Red,
            move_count: 0,
            red_mask: 0,
            blue_mask: 0,
            outcome: None,
        }
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Reset all state to construction-time defaults. No preconditions;
    /// the "only restart when over" policy belongs to the view's key
    /// handling, not the model.
    pub fn restart(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.current = Player::Red;
        self.move_count = 0;
        self.red_mask = 0;
        self.blue_mask = 0;
        self.outcome = None;
    }

    /// Recompute each cell's region as an equal 3x3 subdivision of a
    /// `width` x `height` surface (integer truncation). Cell `(i, j)`
    /// gets the rectangle at `(cell_w * i, cell_h * j)`. Idempotent;
    /// call before hit-testing whenever the surface is resized.
    pub fn relayout(&mut self, width: i32, height: i32) {
        let cell_w = width / GRID_SIZE as i32;
        let cell_h = height / GRID_SIZE as i32;
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                let region = Rect::new(cell_w * i as i32, cell_h * j as i32, cell_w, cell_h);
                self.cells[i * GRID_SIZE + j].set_region(region);
            }
        }
    }

    /// Apply the current player's mark at `(row, col)`.
    ///
    /// Returns true iff a move was actually applied; false leaves every
    /// field untouched (out-of-range position, occupied cell, or game
    /// already over). A `true` return is the caller's redraw signal.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        if self.is_over() {
            return false;
        }
        let Some(idx) = Self::index(row, col) else {
            return false;
        };
        if !self.cells[idx].is_empty() {
            return false;
        }

        self.cells[idx].mark(self.current);
        *self.mask_mut(self.current) |= 1 << idx;
        self.move_count += 1;
        self.evaluate_termination();
        if !self.is_over() {
            self.current = self.current.opponent();
        }
        true
    }

    /// Resolve a screen point to a cell and apply the move there.
    /// Linear scan over the nine regions; false when the point misses
    /// the board entirely.
    pub fn click(&mut self, point: Point) -> bool {
        match self.cell_at(point) {
            Some(idx) => self.attempt_move(idx / GRID_SIZE, idx % GRID_SIZE),
            None => false,
        }
    }

    /// Linear index of the cell whose region contains `point`, if any.
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(point))
    }

    /// Win check for the player who just moved, then the draw check.
    /// Ordering matters: a winning ninth move must report a win, not a
    /// draw.
    fn evaluate_termination(&mut self) {
        let mask = self.mask(self.current);
        for &pattern in &WIN_PATTERNS {
            if pattern & mask == pattern {
                self.outcome = Some(Outcome::Win(self.current));
                return;
            }
        }
        if self.move_count as usize == CELL_COUNT {
            self.outcome = Some(Outcome::Draw);
        }
    }

    /// The player to move (the winner, once the game ends in a win).
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of accepted moves so far, in `0..=9`.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Whether a terminal condition has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The terminal outcome, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Human-readable end-of-game line; empty while in progress.
    pub fn result_message(&self) -> &'static str {
        match self.outcome {
            Some(Outcome::Win(Player::Red)) => "Red wins!",
            Some(Outcome::Win(Player::Blue)) => "Blue wins!",
            Some(Outcome::Draw) => "Evenly matched!",
            None => "",
        }
    }

    /// The three linear positions of the winning line, when the game
    /// ended in a win. Derived from the winner's mask on demand.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        let Some(Outcome::Win(winner)) = self.outcome else {
            return None;
        };
        let mask = self.mask(winner);
        WIN_PATTERNS
            .iter()
            .find(|&&pattern| pattern & mask == pattern)
            .map(|&pattern| {
                let mut line = [0usize; 3];
                let mut n = 0;
                for bit in 0..CELL_COUNT {
                    if pattern & (1 << bit) != 0 {
                        line[n] = bit;
                        n += 1;
                    }
                }
                line
            })
    }

    /// Read access to the grid for rendering and hit-testing.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `(row, col)`; None when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        Self::index(row, col).map(|idx| &self.cells[idx])
    }

    /// Occupancy mask for `player`.
    pub fn mask(&self, player: Player) -> u16 {
        match player {
            Player::Red => self.red_mask,
            Player::Blue => self.blue_mask,
        }
    }

    fn mask_mut(&mut self, player: Player) -> &mut u16 {
        match player {
            Player::Red => &mut self.red_mask,
            Player::Blue => &mut self.blue_mask,
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(GameModel::index(0, 0), Some(0));
        assert_eq!(GameModel::index(0, 2), Some(2));
        assert_eq!(GameModel::index(1, 0), Some(3));
        assert_eq!(GameModel::index(2, 2), Some(8));
        assert_eq!(GameModel::index(3, 0), None);
        assert_eq!(GameModel::index(0, 3), None);
    }

    #[test]
    fn new_game_starts_with_red() {
        let model = GameModel::new();
        assert_eq!(model.current_player(), Player::Red);
        assert_eq!(model.move_count(), 0);
        assert!(!model.is_over());
        assert_eq!(model.result_message(), "");
        assert!(model.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn move_sets_mask_bit_and_alternates() {
        let mut model = GameModel::new();
        assert!(model.attempt_move(1, 2));
        assert_eq!(model.mask(Player::Red), 1 << 5);
        assert_eq!(model.mask(Player::Blue), 0);
        assert_eq!(model.current_player(), Player::Blue);
        assert_eq!(model.move_count(), 1);
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let mut model = GameModel::new();
        assert!(model.attempt_move(0, 0));
        let before = model.clone();
        assert!(!model.attempt_move(0, 0));
        assert_eq!(model, before);
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut model = GameModel::new();
        assert!(!model.attempt_move(3, 1));
        assert!(!model.attempt_move(1, 9));
        assert_eq!(model.move_count(), 0);
        assert_eq!(model.current_player(), Player::Red);
    }

    #[test]
    fn masks_stay_disjoint() {
        let mut model = GameModel::new();
        let moves = [(0, 0), (1, 1), (0, 1), (2, 2), (1, 0), (2, 0)];
        for &(row, col) in &moves {
            assert!(model.attempt_move(row, col));
            assert_eq!(model.mask(Player::Red) & model.mask(Player::Blue), 0);
            let total =
                model.mask(Player::Red).count_ones() + model.mask(Player::Blue).count_ones();
            assert_eq!(total, model.move_count() as u32);
        }
    }

    #[test]
    fn no_moves_accepted_after_win() {
        let mut model = GameModel::new();
        // Red: top row. Blue: scattered.
        for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            assert!(model.attempt_move(row, col));
        }
        assert!(model.is_over());
        assert_eq!(model.outcome(), Some(Outcome::Win(Player::Red)));
        assert!(!model.attempt_move(1, 0));
        assert_eq!(model.move_count(), 5);
    }

    #[test]
    fn winner_stays_current_player() {
        let mut model = GameModel::new();
        for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            model.attempt_move(row, col);
        }
        // Turn alternation stops on the terminal transition.
        assert_eq!(model.current_player(), Player::Red);
    }

    #[test]
    fn winning_line_reports_linear_positions() {
        let mut model = GameModel::new();
        for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            model.attempt_move(row, col);
        }
        assert_eq!(model.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn winning_line_is_none_for_draw_and_in_progress() {
        let mut model = GameModel::new();
        assert_eq!(model.winning_line(), None);
        model.attempt_move(0, 0);
        assert_eq!(model.winning_line(), None);
    }

    #[test]
    fn relayout_assigns_equal_subdivision() {
        let mut model = GameModel::new();
        model.relayout(90, 30);
        // Cell (i, j) sits at (cell_w * i, cell_h * j).
        let cell = model.cell(0, 0).unwrap();
        assert_eq!(cell.region(), Rect::new(0, 0, 30, 10));
        let cell = model.cell(2, 1).unwrap();
        assert_eq!(cell.region(), Rect::new(60, 10, 30, 10));
    }

    #[test]
    fn relayout_truncates_and_is_idempotent() {
        let mut model = GameModel::new();
        model.relayout(100, 31);
        let first: Vec<Rect> = model.cells().iter().map(|c| c.region()).collect();
        assert_eq!(first[0], Rect::new(0, 0, 33, 10));
        model.relayout(100, 31);
        let second: Vec<Rect> = model.cells().iter().map(|c| c.region()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn click_resolves_point_to_cell() {
        let mut model = GameModel::new();
        model.relayout(90, 90);
        // Point in the region at x in [30, 60), y in [60, 90) => cell (1, 2).
        assert!(model.click(Point::new(45, 75)));
        assert_eq!(
            model.cell(1, 2).unwrap().occupant(),
            Some(Player::Red),
        );
    }

    #[test]
    fn click_outside_all_regions_is_a_no_op() {
        let mut model = GameModel::new();
        model.relayout(90, 90);
        assert!(!model.click(Point::new(-5, -5)));
        assert!(!model.click(Point::new(95, 10)));
        assert_eq!(model.move_count(), 0);
    }

    #[test]
    fn restart_resets_everything_but_keeps_regions() {
        let mut model = GameModel::new();
        model.relayout(90, 90);
        for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            model.attempt_move(row, col);
        }
        assert!(model.is_over());

        model.restart();
        assert!(!model.is_over());
        assert_eq!(model.outcome(), None);
        assert_eq!(model.current_player(), Player::Red);
        assert_eq!(model.move_count(), 0);
        assert_eq!(model.mask(Player::Red), 0);
        assert_eq!(model.mask(Player::Blue), 0);
        assert!(model.cells().iter().all(Cell::is_empty));
        // Layout survives: hit-testing still works without a relayout.
        assert!(model.click(Point::new(1, 1)));
    }

    #[test]
    fn restart_mid_game_also_resets() {
        let mut model = GameModel::new();
        model.attempt_move(0, 0);
        model.attempt_move(1, 1);
        model.restart();
        assert_eq!(model.move_count(), 0);
        assert_eq!(model.current_player(), Player::Red);
        assert!(model.cells().iter().all(Cell::is_empty));
    }
}
