//! # rust-carc
//!
//! Placement engine for Carcassonne-like tile-laying games.
//!
//! ## Design Principles
//!
//! 1. **Arena-Owned Tiles**: Every tile of a session lives in one
//!    `TileArena`. Containers and neighbor slots hold `TileId` handles, so
//!    taking a tile back off the board can never leave a dangling link.
//!
//! 2. **All or Nothing**: A placement either commits every change (links,
//!    registry, bounds, frontier) or none. Rejections are returned as
//!    errors and leave the table exactly as it was.
//!
//! 3. **Injected Randomness**: The draw pile is shuffled by a seeded
//!    `GameRng` owned by the table. Same seed, same game.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, players, RNG, configuration
//! - `tiles`: Edge/feature data, tile codes, tile records, the arena
//! - `stack`: Tile containers (draw pile and board registry)
//! - `frontier`: Angle-sorted circular list of open cells
//! - `placement`: Board validation and commit, completion hook
//! - `table`: The session object, plus snapshots
//! - `loader`: Tileset files
//! - `error`: Error taxonomy

pub mod core;
pub mod error;
pub mod tiles;
pub mod stack;
pub mod frontier;
pub mod placement;
pub mod loader;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction,
    Player, PlayerId,
    GameRng, GameRngState, derive_seed,
    TableConfig,
};

pub use crate::error::{
    Error, Result,
    ParseError, EmptyContainerError, TileError, PlacementError, LoadError, SnapshotError,
};

pub use crate::tiles::{AltFeature, Edge, Feature, Rotation, Tile, TileArena, TileCode, TileId};

pub use crate::stack::{Bounds, TileStack};

pub use crate::frontier::{CycleDirection, FrontierList};

pub use crate::placement::{Board, BoardView, CompletionHook, Placement};

pub use crate::table::{PlacedTile, Table, TableSnapshot};
