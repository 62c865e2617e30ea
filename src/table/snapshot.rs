//! Session snapshots.
//!
//! A snapshot records the board (every placed tile with
//! its rotated code, position, and owner, in placement order) and the draw
//! pile order, plus the players, tiles in hand, and the RNG position.
//! Restoring replays the placements through the placement engine, so a
//! restored board satisfies the same invariants as a played one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Table;
use crate::core::{Coord, GameRng, GameRngState, Player, PlayerId};
use crate::error::SnapshotError;
use crate::placement::Board;
use crate::stack::TileStack;
use crate::tiles::{TileArena, TileCode};

/// One placed tile as saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub code: TileCode,
    pub at: Coord,
    pub player: PlayerId,
}

/// Serializable state of a [`Table`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub players: Vec<Player>,
    pub rng: GameRngState,
    pub board: Vec<PlacedTile>,
    /// Draw pile, bottom first.
    pub pile: Vec<TileCode>,
    pub held: Vec<TileCode>,
}

impl TableSnapshot {
    /// Encode with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Table {
    /// Capture the current session state.
    ///
    /// Tile handles are not part of a snapshot; a restored table numbers its
    /// tiles afresh. The completion hook is not captured either.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let board = self
            .board
            .registry()
            .iter()
            .filter_map(|id| {
                let tile = &self.arena[id];
                Some(PlacedTile {
                    code: tile.code(),
                    at: tile.position()?,
                    player: tile.player()?,
                })
            })
            .collect();

        let mut held: Vec<_> = self.held.iter().copied().collect();
        held.sort_unstable();

        TableSnapshot {
            players: self.players.clone(),
            rng: self.rng.state(),
            board,
            pile: self.deck.iter().map(|id| self.arena[id].code()).collect(),
            held: held.into_iter().map(|id| self.arena[id].code()).collect(),
        }
    }

    /// Rebuild a table from a snapshot.
    ///
    /// Placements are replayed in order; any that the engine rejects, or
    /// that name a player not seated at the table, fail the restore.
    pub fn restore(snapshot: &TableSnapshot) -> Result<Self, SnapshotError> {
        let capacity = snapshot.board.len() + snapshot.pile.len() + snapshot.held.len();
        let mut arena = TileArena::with_capacity(capacity);
        let mut board = Board::with_capacity(capacity);

        for (index, placed) in snapshot.board.iter().enumerate() {
            if !snapshot.players.iter().any(|p| p.id() == placed.player) {
                return Err(SnapshotError::UnknownPlayer(placed.player));
            }
            let id = arena.insert(placed.code);
            board
                .place(&mut arena, id, placed.player, placed.at)
                .map_err(|source| SnapshotError::Replay { index, source })?;
        }

        let mut deck = TileStack::with_capacity(snapshot.pile.len());
        for &code in &snapshot.pile {
            deck.push(arena.insert(code));
        }

        let held: FxHashSet<_> = snapshot.held.iter().map(|&code| arena.insert(code)).collect();

        debug!(
            board = board.len(),
            pile = deck.len(),
            held = held.len(),
            "table restored"
        );

        Ok(Self {
            players: snapshot.players.clone(),
            rng: GameRng::from_state(&snapshot.rng),
            arena,
            deck,
            board,
            held,
            hook: None,
        })
    }
}
