//! Tiles: terrain data, tile records, and the arena that owns them.
//!
//! ## Key Types
//!
//! - `Edge`, `Feature`, `AltFeature`: terrain enums with tile-code alphabets
//! - `TileCode`: parsed six-character code (edges, feature, alt-feature)
//! - `Tile`: a code plus placement state and neighbor handles
//! - `TileArena`: owns every tile of a session, indexed by `TileId`

pub mod edge;
pub mod tile;
pub mod arena;

pub use edge::{AltFeature, Edge, Feature};
pub use tile::{Rotation, Tile, TileCode, TileId, TILE_CODE_LEN};
pub use arena::TileArena;
