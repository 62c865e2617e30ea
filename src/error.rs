//! Error taxonomy.
//!
//! Every failure here is recoverable and leaves engine state untouched:
//! a rejected tile code never reaches the pile, a rejected placement never
//! links, bounds, or frontier-edits anything.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Coord, Direction};
use crate::tiles::{Edge, TileId};

/// Convenience alias for results using the umbrella [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A malformed tile code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("tile code \"{code}\" has {len} characters, expected 6")]
    Length { code: String, len: usize },

    #[error("tile code \"{code}\": '{found}' is not a valid {field} at position {position}")]
    Character {
        code: String,
        /// Field position, 0..=5 (four edges, feature, alt-feature).
        position: usize,
        field: &'static str,
        found: char,
    },
}

/// A draw from a container holding no tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tile container is empty")]
pub struct EmptyContainerError;

/// An operation on a single tile that its state forbids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("{0} is not part of this table")]
    Unknown(TileId),

    #[error("{tile} is already placed at {at}")]
    AlreadyPlaced { tile: TileId, at: Coord },
}

/// A rejected placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{0} is not part of this table")]
    UnknownTile(TileId),

    #[error("{0} is not held; draw it before placing it")]
    NotHeld(TileId),

    #[error("{tile} is already placed at {at}")]
    AlreadyPlaced { tile: TileId, at: Coord },

    #[error("cell {at} lies on the edge of the grid")]
    OutOfRange { at: Coord },

    #[error("cell {at} is already occupied")]
    CoordinateCollision { at: Coord },

    #[error("cell {at} has no placed neighbor")]
    IsolatedPlacement { at: Coord },

    #[error("{direction} edge at {at} is {edge}, but the neighbor presents {neighbor_edge}")]
    EdgeMismatch {
        at: Coord,
        direction: Direction,
        edge: Edge,
        neighbor_edge: Edge,
    },
}

/// A tileset file that could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tileset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("improper tile code at tile {index} in file {}", path.display())]
    Parse {
        path: PathBuf,
        /// 0-based token position within the file.
        index: usize,
        #[source]
        source: ParseError,
    },
}

/// A snapshot that could not be encoded, decoded, or replayed.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed")]
    Encoding(#[from] bincode::Error),

    #[error("snapshot tile {index} is invalid")]
    Tile {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("snapshot seats no player {0}")]
    UnknownPlayer(crate::core::PlayerId),

    #[error("snapshot placement {index} could not be replayed")]
    Replay {
        index: usize,
        #[source]
        source: PlacementError,
    },
}

/// Umbrella error for callers that do not care which stage failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    EmptyContainer(#[from] EmptyContainerError),

    #[error(transparent)]
    Tile(#[from] TileError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
