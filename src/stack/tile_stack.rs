//! Insertion-ordered tile container.
//!
//! One type serves two roles:
//! - **Draw pile**: tiles are pushed while loading and drawn LIFO
//! - **Board registry**: placed tiles, looked up by coordinate, with a
//!   bounding extent
//!
//! Drawing is also how a tile comes back off the board, so `draw` always
//! unlinks the tile from its neighbors, whichever role the stack plays.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::core::{Coord, GameRng, DEFAULT_STACK_CAPACITY};
use crate::error::EmptyContainerError;
use crate::tiles::{TileArena, TileId};

/// Ordered collection of tile handles.
///
/// ## Usage
///
/// ```
/// use rust_carc::stack::TileStack;
/// use rust_carc::tiles::TileArena;
///
/// let mut arena = TileArena::new();
/// let mut pile = TileStack::new();
/// pile.push(arena.create("ggggxx").unwrap());
/// pile.push(arena.create("rrcccx").unwrap());
///
/// let top = pile.draw(&mut arena).unwrap();
/// assert_eq!(arena[top].code().to_string(), "rrcccx");
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileStack {
    tiles: Vec<TileId>,
    bounds: Option<Bounds>,
}

impl Default for TileStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }
}

impl TileStack {
    /// Create an empty stack with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with room for `capacity` tiles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            bounds: None,
        }
    }

    /// Append a tile. Capacity doubles when full.
    pub fn push(&mut self, tile: TileId) {
        self.tiles.push(tile);
    }

    /// Remove and return the most recently pushed tile.
    ///
    /// Every non-empty neighbor slot of the tile is cleared, along with the
    /// neighbor's slot pointing back at it.
    pub fn draw(&mut self, arena: &mut TileArena) -> Result<TileId, EmptyContainerError> {
        let tile = self.tiles.pop().ok_or(EmptyContainerError)?;
        arena.unlink_all(tile);
        Ok(tile)
    }

    /// The tile `draw` would return, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<TileId> {
        self.tiles.last().copied()
    }

    /// Find the tile sitting at `at`.
    ///
    /// Linear scan; boards stay in the low hundreds of tiles.
    #[must_use]
    pub fn find(&self, at: Coord, arena: &TileArena) -> Option<TileId> {
        self.tiles
            .iter()
            .copied()
            .find(|&id| arena[id].position() == Some(at))
    }

    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tiles.capacity()
    }

    /// Tiles in push order (the last one is drawn first).
    #[must_use]
    pub fn as_slice(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().copied()
    }

    /// Shuffle the stack in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Bounding extent of every coordinate recorded so far.
    ///
    /// `None` until the first [`extend_bounds`](Self::extend_bounds).
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Grow the bounding extent to cover `at`. Never shrinks.
    pub fn extend_bounds(&mut self, at: Coord) {
        match &mut self.bounds {
            Some(bounds) => bounds.extend(at),
            None => self.bounds = Some(Bounds::point(at)),
        }
    }
}
