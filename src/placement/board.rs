//! The board: placed-tile registry plus the frontier of open cells.
//!
//! `Board::place` is the placement engine. It validates a candidate against
//! the four adjacent cells and either commits everything (neighbor links,
//! registry, bounds, frontier) or changes nothing at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Coord, Direction, PlayerId};
use crate::error::{EmptyContainerError, PlacementError};
use crate::frontier::FrontierList;
use crate::stack::{Bounds, TileStack};
use crate::tiles::{Rotation, Tile, TileArena, TileCode, TileId};

/// Occupants of the four adjacent cells, in North, East, South, West order.
pub type Neighbors = [Option<TileId>; 4];

/// Record of a committed placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tile: TileId,
    pub player: PlayerId,
    pub at: Coord,
    /// Neighbors now linked to the tile, by direction from the tile.
    pub linked: SmallVec<[(Direction, TileId); 4]>,
    /// Cells that joined the frontier because of this placement.
    pub opened: SmallVec<[Coord; 4]>,
}

/// Placed tiles and the open cells around them.
#[derive(Clone, Debug, Default)]
pub struct Board {
    registry: TileStack,
    frontier: FrontierList,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty board whose registry has room for `capacity` tiles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: TileStack::with_capacity(capacity),
            frontier: FrontierList::new(),
        }
    }

    /// Placed tiles, in placement order.
    #[must_use]
    pub fn registry(&self) -> &TileStack {
        &self.registry
    }

    #[must_use]
    pub fn frontier(&self) -> &FrontierList {
        &self.frontier
    }

    /// Mutable access for moving the frontier cursor.
    pub fn frontier_mut(&mut self) -> &mut FrontierList {
        &mut self.frontier
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Bounding extent of every cell ever placed on.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.registry.bounds()
    }

    /// The tile occupying `at`.
    #[must_use]
    pub fn tile_at(&self, at: Coord, arena: &TileArena) -> Option<TileId> {
        self.registry.find(at, arena)
    }

    #[must_use]
    pub fn is_occupied(&self, at: Coord, arena: &TileArena) -> bool {
        self.tile_at(at, arena).is_some()
    }

    /// Read-only view pairing this board with the arena holding its tiles.
    #[must_use]
    pub fn view<'a>(&'a self, arena: &'a TileArena) -> BoardView<'a> {
        BoardView { arena, board: self }
    }

    /// Check whether `tile` could be placed at `at` as currently rotated.
    ///
    /// Returns the occupants of the adjacent cells on success.
    pub fn check(
        &self,
        arena: &TileArena,
        tile: TileId,
        at: Coord,
    ) -> Result<Neighbors, PlacementError> {
        let candidate = arena.get(tile).ok_or(PlacementError::UnknownTile(tile))?;
        if let Some(placed) = candidate.position() {
            return Err(PlacementError::AlreadyPlaced { tile, at: placed });
        }
        self.check_code(arena, candidate.code(), at)
    }

    /// Check whether a tile with `code` could go at `at`.
    ///
    /// Only interior cells of the grid take tiles, so every placed tile
    /// has four adjacent cells. The first tile on an empty board fits at
    /// any interior cell. After that a tile
    /// needs at least one neighbor, and every edge facing a neighbor must
    /// equal that neighbor's opposite edge.
    pub fn check_code(
        &self,
        arena: &TileArena,
        code: TileCode,
        at: Coord,
    ) -> Result<Neighbors, PlacementError> {
        if !at.is_interior() {
            return Err(PlacementError::OutOfRange { at });
        }
        if self.is_occupied(at, arena) {
            return Err(PlacementError::CoordinateCollision { at });
        }

        let near: Neighbors =
            Direction::ALL.map(|dir| at.step(dir).and_then(|cell| self.tile_at(cell, arena)));
        if !self.is_empty() && near.iter().all(Option::is_none) {
            return Err(PlacementError::IsolatedPlacement { at });
        }

        for direction in Direction::ALL {
            let Some(neighbor) = near[direction.index()] else {
                continue;
            };
            let edge = code.edges[direction.index()];
            let neighbor_edge = arena[neighbor].edge(direction.opposite());
            if edge != neighbor_edge {
                return Err(PlacementError::EdgeMismatch {
                    at,
                    direction,
                    edge,
                    neighbor_edge,
                });
            }
        }

        Ok(near)
    }

    /// Place `tile` for `player` at `at`.
    ///
    /// On success the tile is linked both ways with every neighbor, stamped
    /// with owner and position, added to the registry and bounds, and the
    /// frontier loses `at` and gains the newly exposed cells. On failure
    /// nothing changes.
    pub fn place(
        &mut self,
        arena: &mut TileArena,
        tile: TileId,
        player: PlayerId,
        at: Coord,
    ) -> Result<Placement, PlacementError> {
        let near = self.check(arena, tile, at)?;

        let mut linked = SmallVec::new();
        for direction in Direction::ALL {
            if let Some(neighbor) = near[direction.index()] {
                arena.link(tile, direction, neighbor);
                linked.push((direction, neighbor));
            }
        }

        arena[tile].place(player, at);
        self.registry.extend_bounds(at);
        self.registry.push(tile);
        self.frontier.remove(at);

        let mut opened = SmallVec::new();
        for (_, cell) in at.neighbors() {
            if !self.is_occupied(cell, arena) && self.frontier.insert(cell) {
                opened.push(cell);
            }
        }

        debug!(
            %tile,
            %player,
            %at,
            linked = linked.len(),
            opened = opened.len(),
            "tile placed"
        );

        Ok(Placement {
            tile,
            player,
            at,
            linked,
            opened,
        })
    }

    /// Take the most recently placed tile back off the board.
    ///
    /// The tile is unlinked from every neighbor, loses its owner and
    /// position, and the frontier is patched around the vacated cell.
    /// Bounds are left as they were.
    pub fn lift_last(&mut self, arena: &mut TileArena) -> Result<TileId, EmptyContainerError> {
        let tile = self.registry.draw(arena)?;
        let vacated = arena[tile].position();
        arena[tile].lift();

        if let Some(at) = vacated {
            self.resync_around(at, arena);
            debug!(%tile, %at, "tile lifted");
        }
        Ok(tile)
    }

    /// Clockwise quarter-turns (0..4) under which `code` fits at `at`.
    #[must_use]
    pub fn legal_rotations(&self, arena: &TileArena, code: TileCode, at: Coord) -> SmallVec<[u8; 4]> {
        let mut turns = SmallVec::new();
        let mut rotated = code;
        for turn in 0..4u8 {
            if self.check_code(arena, rotated, at).is_ok() {
                turns.push(turn);
            }
            rotated = rotated.rotated(Rotation::Clockwise);
        }
        turns
    }

    /// Every frontier cell and rotation under which `code` fits.
    ///
    /// Cells come in frontier order. An empty board has no frontier; any
    /// cell is legal there, and this reports the origin in every rotation.
    #[must_use]
    pub fn legal_placements(&self, arena: &TileArena, code: TileCode) -> Vec<(Coord, u8)> {
        if self.is_empty() {
            return (0..4).map(|turn| (Coord::ORIGIN, turn)).collect();
        }

        self.frontier
            .iter()
            .flat_map(|at| {
                self.legal_rotations(arena, code, at)
                    .into_iter()
                    .map(move |turn| (at, turn))
            })
            .collect()
    }

    fn touches_board(&self, cell: Coord, arena: &TileArena) -> bool {
        cell.neighbors()
            .any(|(_, near)| self.is_occupied(near, arena))
    }

    fn resync_around(&mut self, at: Coord, arena: &TileArena) {
        if self.registry.is_empty() {
            self.frontier.clear();
            return;
        }

        if self.touches_board(at, arena) {
            self.frontier.insert(at);
        }
        for (_, cell) in at.neighbors() {
            if !self.is_occupied(cell, arena) && !self.touches_board(cell, arena) {
                self.frontier.remove(cell);
            }
        }
    }
}

/// Read-only view of a board for renderers and completion hooks.
///
/// Exposes every placed tile (position, edges, feature, alt-feature,
/// owner), the bounding extent, coordinate lookup, and the frontier.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    arena: &'a TileArena,
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.board.bounds()
    }

    /// The tile occupying `at`.
    #[must_use]
    pub fn tile_at(&self, at: Coord) -> Option<&'a Tile> {
        self.board.tile_at(at, self.arena).map(|id| &self.arena[id])
    }

    /// Any tile of the session by handle, placed or not.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&'a Tile> {
        self.arena.get(id)
    }

    /// Placed tiles in placement order.
    pub fn tiles(&self) -> impl Iterator<Item = &'a Tile> + 'a {
        let (arena, board) = (self.arena, self.board);
        board.registry.iter().map(move |id| &arena[id])
    }

    #[must_use]
    pub fn frontier(&self) -> &'a FrontierList {
        let board = self.board;
        &board.frontier
    }
}
