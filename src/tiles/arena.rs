//! The owning table of every tile in a session.
//!
//! Tiles never move once created; containers and neighbor slots refer to
//! them by [`TileId`]. Handles are never reused, so a stale handle can at
//! worst point at a tile that has since been lifted, never at freed memory.

use smallvec::SmallVec;

use super::tile::{Tile, TileCode, TileId};
use crate::core::Direction;
use crate::error::ParseError;

/// Arena of tiles indexed by [`TileId`].
///
/// ```
/// use rust_carc::tiles::TileArena;
///
/// let mut arena = TileArena::new();
/// let id = arena.create("ggggxx").unwrap();
/// assert_eq!(arena.len(), 1);
/// assert!(!arena[id].is_placed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileArena {
    tiles: Vec<Tile>,
}

impl TileArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` tiles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
        }
    }

    /// Parse a tile code and add the tile.
    ///
    /// Nothing is added if the code is malformed.
    pub fn create(&mut self, code: &str) -> Result<TileId, ParseError> {
        let code: TileCode = code.parse()?;
        Ok(self.insert(code))
    }

    /// Add an unplaced tile built from an already-parsed code.
    pub fn insert(&mut self, code: TileCode) -> TileId {
        let id = TileId::new(self.tiles.len() as u32);
        self.tiles.push(Tile::new(id, code));
        id
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over every tile, placed or not.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Link `a` and `b` so that `b` is `a`'s neighbor in `direction`.
    ///
    /// Sets both slots, keeping the linkage symmetric.
    pub(crate) fn link(&mut self, a: TileId, direction: Direction, b: TileId) {
        self[a].set_neighbor(direction, Some(b));
        self[b].set_neighbor(direction.opposite(), Some(a));
    }

    /// Clear every neighbor slot of `id` along with the matching
    /// back-reference on each neighbor.
    ///
    /// Returns the neighbors that were unlinked.
    pub(crate) fn unlink_all(&mut self, id: TileId) -> SmallVec<[TileId; 4]> {
        let mut unlinked = SmallVec::new();
        for direction in Direction::ALL {
            if let Some(other) = self[id].neighbor(direction) {
                self[other].set_neighbor(direction.opposite(), None);
                self[id].set_neighbor(direction, None);
                unlinked.push(other);
            }
        }
        unlinked
    }
}

impl std::ops::Index<TileId> for TileArena {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.tiles[id.index()]
    }
}

impl std::ops::IndexMut<TileId> for TileArena {
    fn index_mut(&mut self, id: TileId) -> &mut Self::Output {
        &mut self.tiles[id.index()]
    }
}
