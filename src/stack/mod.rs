//! Tile containers: the draw pile and the board registry.

mod bounds;
mod tile_stack;

pub use bounds::Bounds;
pub use tile_stack::TileStack;
