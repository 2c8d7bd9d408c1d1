//! One board square: occupancy plus the screen-space region used for
//! hit-testing and drawing.
//!
//! The region is assigned by the layout pass ([`GameModel::relayout`]),
//! never by game logic.
//!
//! [`GameModel::relayout`]: crate::model::GameModel::relayout

use tui_tictactoe_types::{Occupant, Player, Point, Rect};

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupant: Occupant,
    region: Rect,
}

impl Cell {
    /// Current occupancy (None = empty).
    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// Whether no player has marked this cell.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// The screen-space rectangle assigned by the layout pass.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Whether `point` lies within this cell's region.
    pub fn contains(&self, point: Point) -> bool {
        self.region.contains(point)
    }

    pub(crate) fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    pub(crate) fn mark(&mut self, player: Player) {
        self.occupant = Some(player);
    }

    pub(crate) fn clear(&mut self) {
        self.occupant = None;
    }
}
