//! Core types shared across the application.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (fixed 3x3).
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The eight winning lines as 9-bit masks over linear positions
/// (bit `i` corresponds to `row * 3 + col`): three rows, three
/// columns, two diagonals.
pub const WIN_PATTERNS: [u16; 8] = [
    0b000_000_111, // row 0
    0b000_111_000, // row 1
    0b111_000_000, // row 2
    0b001_001_001, // col 0
    0b010_010_010, // col 1
    0b100_100_100, // col 2
    0b100_010_001, // diagonal
    0b001_010_100, // anti-diagonal
];

/// One of the two players. Red moves first and plays circles,
/// Blue plays crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The mark glyph drawn for this player.
    pub fn glyph(&self) -> char {
        match self {
            Player::Red => 'O',
            Player::Blue => 'X',
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

/// Occupancy of a board cell (None = empty, Some = marked by a player).
pub type Occupant = Option<Player>;

/// A point in screen space. Signed so that pointer coordinates from
/// outside the board (including synthetic negative ones in tests) are
/// representable and simply miss every region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned screen-space rectangle. Containment is half-open:
/// the right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether `point` lies within this rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Game actions triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Restart,
}

/// Pointer events forwarded to the game by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed at a screen point.
    Clicked(Point),
    /// Pointer moved to a screen point (hover preview only, never a move).
    Moved(Point),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_patterns_have_three_bits_each() {
        for &pattern in &WIN_PATTERNS {
            assert_eq!(pattern.count_ones(), 3, "pattern {pattern:#011b}");
            assert!(pattern < 1 << CELL_COUNT);
        }
    }

    #[test]
    fn win_patterns_match_classic_table() {
        // Same eight values as the canonical bitmask solution.
        let mut sorted: Vec<u16> = WIN_PATTERNS.to_vec();
        sorted.sort_unstable();
        let mut expected = vec![7, 56, 448, 73, 146, 292, 273, 84];
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn rect_containment_is_half_open() {
        let r = Rect::new(10, 20, 5, 4);
        assert!(r.contains(Point::new(10, 20)));
        assert!(r.contains(Point::new(14, 23)));
        assert!(!r.contains(Point::new(15, 20)));
        assert!(!r.contains(Point::new(10, 24)));
        assert!(!r.contains(Point::new(9, 20)));
        assert!(!r.contains(Point::new(-1, -1)));
    }

    #[test]
    fn player_opponent_round_trips() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent().opponent(), Player::Blue);
    }
}
