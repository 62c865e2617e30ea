//! Board coordinates and compass directions.
//!
//! The board is the `i32` grid. `y` grows to the North and `x` grows to the
//! East, so the first tile usually sits at the origin and the rest of the
//! board spreads out from it in every direction. Cells on the outermost
//! rows and columns have fewer than four neighbors and cannot hold a tile.
//!
//! ```
//! use rust_carc::core::{Coord, Direction};
//!
//! let origin = Coord::ORIGIN;
//! assert_eq!(origin.step(Direction::North), Some(Coord::new(1, 0)));
//! assert_eq!(origin.step(Direction::West), Some(Coord::new(0, -1)));
//! assert_eq!(Coord::new(i32::MAX, 0).step(Direction::North), None);
//! assert_eq!(Direction::East.opposite(), Direction::West);
//! ```

use serde::{Deserialize, Serialize};

/// One of the four sides of a square tile, in clockwise order.
///
/// The discriminant is the edge slot index: edge `i` of a tile faces the
/// neighbor in direction `i`, and must match that neighbor's edge
/// `(i + 2) % 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot index of this direction (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Grid offset `(dy, dx)` of the adjacent cell in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// A cell on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

impl Coord {
    /// The cell where the first tile of a session normally goes.
    pub const ORIGIN: Coord = Coord { y: 0, x: 0 };

    /// Create a coordinate from `(y, x)`.
    #[must_use]
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// The adjacent cell in `direction`, or `None` past the edge of the grid.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dy, dx) = direction.offset();
        match (self.y.checked_add(dy), self.x.checked_add(dx)) {
            (Some(y), Some(x)) => Some(Self { y, x }),
            _ => None,
        }
    }

    /// Whether all four adjacent cells exist. Only interior cells take tiles.
    #[must_use]
    pub const fn is_interior(self) -> bool {
        self.y != i32::MIN && self.y != i32::MAX && self.x != i32::MIN && self.x != i32::MAX
    }

    /// The adjacent cells that exist, in N, E, S, W order, paired with the
    /// direction leading to each.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Coord)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir).map(|cell| (dir, cell)))
    }

    /// Polar angle of this cell around the origin, `atan2(y, x)`.
    ///
    /// Ranges over `(-pi, pi]`. Used to keep the frontier sorted.
    #[must_use]
    pub fn angle(self) -> f64 {
        f64::from(self.y).atan2(f64::from(self.x))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((y, x): (i32, i32)) -> Self {
        Self { y, x }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}
