//! Bounding extent of a board registry.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Smallest rectangle covering every coordinate ever placed.
///
/// It is a high-water mark: lifting a tile back off the board does not
/// shrink it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min_y: i32,
    pub max_y: i32,
    pub min_x: i32,
    pub max_x: i32,
}

impl Bounds {
    /// A rectangle covering exactly one cell.
    #[must_use]
    pub const fn point(at: Coord) -> Self {
        Self {
            min_y: at.y,
            max_y: at.y,
            min_x: at.x,
            max_x: at.x,
        }
    }

    /// Grow to cover `at`.
    pub fn extend(&mut self, at: Coord) {
        self.min_y = self.min_y.min(at.y);
        self.max_y = self.max_y.max(at.y);
        self.min_x = self.min_x.min(at.x);
        self.max_x = self.max_x.max(at.x);
    }

    #[must_use]
    pub const fn contains(&self, at: Coord) -> bool {
        at.y >= self.min_y && at.y <= self.max_y && at.x >= self.min_x && at.x <= self.max_x
    }
}
