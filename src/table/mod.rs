//! The table: one game session.
//!
//! A `Table` exclusively owns everything a session needs: the players, the
//! RNG, the tile arena, the draw pile, and the board. All mutation goes
//! through it, one call at a time; nothing here is shared across threads.
//! A networked front end must serialize `draw`/`place` per table itself.
//!
//! ## Turn flow
//!
//! ```
//! use rust_carc::core::{Coord, PlayerId, TableConfig};
//! use rust_carc::table::Table;
//!
//! let config = TableConfig::new().with_player("Ada").with_seed(1).unshuffled();
//! let mut table = Table::from_codes(config, ["ggggxx", "ggggxx"]).unwrap();
//!
//! let first = table.draw().unwrap();
//! table.place(first, PlayerId::new(0), Coord::ORIGIN).unwrap();
//!
//! let second = table.draw().unwrap();
//! let at = table.frontier().head().unwrap();
//! table.place(second, PlayerId::new(0), at).unwrap();
//!
//! assert_eq!(table.board().len(), 2);
//! assert_eq!(table.deck_len(), 0);
//! ```

mod snapshot;

pub use snapshot::{PlacedTile, TableSnapshot};

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::core::{derive_seed, Coord, GameRng, Player, PlayerId, TableConfig};
use crate::error::{EmptyContainerError, LoadError, ParseError, PlacementError, TileError};
use crate::frontier::{CycleDirection, FrontierList};
use crate::loader::load_tileset;
use crate::placement::{Board, BoardView, CompletionHook, Placement};
use crate::stack::TileStack;
use crate::tiles::{Rotation, Tile, TileArena, TileCode, TileId};

/// A game session.
pub struct Table {
    players: Vec<Player>,
    rng: GameRng,
    arena: TileArena,
    deck: TileStack,
    board: Board,
    /// Drawn but not yet placed.
    held: FxHashSet<TileId>,
    hook: Option<Box<dyn CompletionHook>>,
}

impl Table {
    /// Create a table with an empty draw pile.
    ///
    /// Tileset paths in `config` are ignored; see [`Table::new`].
    #[must_use]
    pub fn empty(config: TableConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| derive_seed(&config.players));
        Self {
            rng: GameRng::new(seed),
            arena: TileArena::with_capacity(config.initial_capacity),
            deck: TileStack::with_capacity(config.initial_capacity),
            board: Board::with_capacity(config.initial_capacity),
            held: FxHashSet::default(),
            hook: None,
            players: config.players,
        }
    }

    /// Create a table and fill the draw pile from the configured tilesets.
    ///
    /// Every file is parsed before any tile is added. The pile is shuffled
    /// unless the config says otherwise.
    pub fn new(config: TableConfig) -> Result<Self, LoadError> {
        let codes = config
            .tilesets
            .iter()
            .map(load_tileset)
            .collect::<Result<Vec<_>, _>>()?;
        let shuffle = config.shuffle;

        let mut table = Self::empty(config);
        for code in codes.into_iter().flatten() {
            table.push_code(code);
        }
        if shuffle {
            table.shuffle_pile();
        }
        info!(tiles = table.deck_len(), seed = table.seed(), "table ready");
        Ok(table)
    }

    /// Create a table whose draw pile holds `codes`.
    ///
    /// All codes are parsed first; one bad code rejects the lot.
    pub fn from_codes<I, S>(config: TableConfig, codes: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = codes
            .into_iter()
            .map(|code| code.as_ref().parse::<TileCode>())
            .collect::<Result<Vec<_>, _>>()?;
        let shuffle = config.shuffle;

        let mut table = Self::empty(config);
        for code in parsed {
            table.push_code(code);
        }
        if shuffle {
            table.shuffle_pile();
        }
        Ok(table)
    }

    /// Parse `code` and push the tile onto the draw pile.
    pub fn add_tile(&mut self, code: &str) -> Result<TileId, ParseError> {
        let code = code.parse()?;
        Ok(self.push_code(code))
    }

    /// Load a tileset file onto the draw pile. Returns the number of tiles added.
    pub fn load_tileset(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let codes = load_tileset(path)?;
        let count = codes.len();
        for code in codes {
            self.push_code(code);
        }
        Ok(count)
    }

    /// Shuffle the draw pile with the table's RNG.
    pub fn shuffle_pile(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Draw the top tile of the pile into the caller's hand.
    pub fn draw(&mut self) -> Result<TileId, EmptyContainerError> {
        let tile = self.deck.draw(&mut self.arena)?;
        self.held.insert(tile);
        debug!(%tile, left = self.deck.len(), "tile drawn");
        Ok(tile)
    }

    /// Turn a held tile one step.
    pub fn rotate(&mut self, tile: TileId, rotation: Rotation) -> Result<(), TileError> {
        self.arena
            .get_mut(tile)
            .ok_or(TileError::Unknown(tile))?
            .rotate(rotation)
    }

    /// Place a held tile for `player` at `at`.
    ///
    /// On success the completion hook, if any, runs before this returns.
    /// On failure the table is unchanged and the tile stays in hand.
    pub fn place(
        &mut self,
        tile: TileId,
        player: PlayerId,
        at: Coord,
    ) -> Result<Placement, PlacementError> {
        if !self.arena.contains(tile) {
            return Err(PlacementError::UnknownTile(tile));
        }
        if !self.held.contains(&tile) {
            if let Some(placed) = self.arena[tile].position() {
                return Err(PlacementError::AlreadyPlaced { tile, at: placed });
            }
            return Err(PlacementError::NotHeld(tile));
        }

        let placement = self
            .board
            .place(&mut self.arena, tile, player, at)
            .inspect_err(|err| warn!(%tile, %player, %at, error = %err, "placement rejected"))?;
        self.held.remove(&tile);

        if let Some(hook) = self.hook.as_mut() {
            hook.on_placed(&self.arena[tile], self.board.view(&self.arena));
        }
        Ok(placement)
    }

    /// Take the most recently placed tile back into the caller's hand.
    pub fn take_back(&mut self) -> Result<TileId, EmptyContainerError> {
        let tile = self.board.lift_last(&mut self.arena)?;
        self.held.insert(tile);
        Ok(tile)
    }

    /// Every (cell, clockwise turns) under which a tile fits right now.
    pub fn legal_placements(&self, tile: TileId) -> Result<Vec<(Coord, u8)>, TileError> {
        let code = self.arena.get(tile).ok_or(TileError::Unknown(tile))?.code();
        Ok(self.board.legal_placements(&self.arena, code))
    }

    /// Move the frontier cursor and return the selected cell.
    pub fn cycle_frontier(&mut self, direction: CycleDirection) -> Option<Coord> {
        self.board.frontier_mut().cycle(direction)
    }

    /// Install the hook run after every successful placement.
    pub fn set_completion_hook(&mut self, hook: impl CompletionHook + 'static) {
        self.hook = Some(Box::new(hook));
    }

    /// Remove the completion hook.
    pub fn clear_completion_hook(&mut self) {
        self.hook = None;
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.arena.get(id)
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> BoardView<'_> {
        self.board.view(&self.arena)
    }

    #[must_use]
    pub fn frontier(&self) -> &FrontierList {
        self.board.frontier()
    }

    /// The draw pile; the last entry is drawn next.
    #[must_use]
    pub fn pile(&self) -> &TileStack {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Tiles drawn but not yet placed.
    pub fn held(&self) -> impl Iterator<Item = TileId> + '_ {
        self.held.iter().copied()
    }

    #[must_use]
    pub fn is_held(&self, tile: TileId) -> bool {
        self.held.contains(&tile)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// The seed the table's RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn push_code(&mut self, code: TileCode) -> TileId {
        let id = self.arena.insert(code);
        self.deck.push(id);
        id
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("players", &self.players)
            .field("seed", &self.rng.seed())
            .field("deck", &self.deck.len())
            .field("board", &self.board.len())
            .field("held", &self.held.len())
            .field("hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn config() -> TableConfig {
        TableConfig::new()
            .with_player("Ada")
            .with_player("Grace")
            .with_seed(5)
            .unshuffled()
    }

    const P0: PlayerId = PlayerId::new(0);

    #[test]
    fn test_from_codes_counts() {
        let table = Table::from_codes(config(), ["gggg_x_x", "rrcc_c_x"]).unwrap();
        assert_eq!(table.deck_len(), 2);
        assert_eq!(table.board().len(), 0);
    }

    #[test]
    fn test_from_codes_rejects_all_on_error() {
        let err = Table::from_codes(config(), ["ggggxx", "gggg?x"]).unwrap_err();
        assert!(matches!(err, ParseError::Character { position: 4, .. }));
    }

    #[test]
    fn test_unshuffled_draws_last_code_first() {
        let mut table = Table::from_codes(config(), ["ggggxx", "rrccxx"]).unwrap();
        let tile = table.draw().unwrap();
        assert_eq!(table.tile(tile).unwrap().code().to_string(), "rrccxx");
    }

    #[test]
    fn test_draw_empty() {
        let mut table = Table::empty(config());
        assert_eq!(table.draw(), Err(EmptyContainerError));
    }

    #[test]
    fn test_place_requires_held_tile() {
        let mut table = Table::from_codes(config(), ["ggggxx", "ggggxx"]).unwrap();
        let in_pile = table.pile().peek().unwrap();

        let err = table.place(in_pile, P0, Coord::ORIGIN).unwrap_err();

        assert_eq!(err, PlacementError::NotHeld(in_pile));
        assert_eq!(table.board().len(), 0);
    }

    #[test]
    fn test_place_twice_reports_position() {
        let mut table = Table::from_codes(config(), ["ggggxx"]).unwrap();
        let tile = table.draw().unwrap();
        table.place(tile, P0, Coord::ORIGIN).unwrap();

        let err = table.place(tile, P0, Coord::new(0, 1)).unwrap_err();
        assert_eq!(err, PlacementError::AlreadyPlaced { tile, at: Coord::ORIGIN });
    }

    #[test]
    fn test_rejected_tile_stays_held() {
        let mut table = Table::from_codes(config(), ["ggcgxx", "ggggxx"]).unwrap();
        let first = table.draw().unwrap();
        table.place(first, P0, Coord::ORIGIN).unwrap();
        let second = table.draw().unwrap();

        assert!(table.place(second, P0, Coord::new(1, 0)).is_err());

        assert!(table.is_held(second));
        table.rotate(second, Rotation::Clockwise).unwrap();
        table.rotate(second, Rotation::Clockwise).unwrap();
        table.place(second, P0, Coord::new(1, 0)).unwrap();
        assert!(!table.is_held(second));
    }

    #[test]
    fn test_rotate_unknown_and_placed() {
        let mut table = Table::from_codes(config(), ["ggggxx"]).unwrap();
        assert_eq!(
            table.rotate(TileId::new(7), Rotation::Clockwise),
            Err(TileError::Unknown(TileId::new(7)))
        );

        let tile = table.draw().unwrap();
        table.place(tile, P0, Coord::ORIGIN).unwrap();
        assert!(matches!(
            table.rotate(tile, Rotation::Clockwise),
            Err(TileError::AlreadyPlaced { .. })
        ));
    }

    #[test]
    fn test_hook_sees_each_placement() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut table = Table::from_codes(config(), ["ggggxx", "ggggxx", "ggggxx"]).unwrap();
        table.set_completion_hook(move |tile: &Tile, board: BoardView<'_>| {
            sink.borrow_mut().push((tile.position(), board.len()));
        });

        let a = table.draw().unwrap();
        table.place(a, P0, Coord::ORIGIN).unwrap();
        let b = table.draw().unwrap();
        // Rejected placements never reach the hook.
        let _ = table.place(b, P0, Coord::new(4, 4));
        table.place(b, P0, Coord::new(0, 1)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![(Some(Coord::ORIGIN), 1), (Some(Coord::new(0, 1)), 2)]
        );

        table.clear_completion_hook();
        let c = table.draw().unwrap();
        table.place(c, P0, Coord::new(0, -1)).unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_take_back_returns_to_hand() {
        let mut table = Table::from_codes(config(), ["ggggxx", "ggggxx"]).unwrap();
        let a = table.draw().unwrap();
        table.place(a, P0, Coord::ORIGIN).unwrap();
        let b = table.draw().unwrap();
        table.place(b, P0, Coord::new(1, 0)).unwrap();

        assert_eq!(table.take_back(), Ok(b));
        assert!(table.is_held(b));
        assert_eq!(table.board().len(), 1);
        assert_eq!(table.tile(a).unwrap().neighbors(), [None; 4]);

        table.place(b, P0, Coord::new(0, -1)).unwrap();
        assert_eq!(table.tile(a).unwrap().neighbor(crate::core::Direction::West), Some(b));
    }

    #[test]
    fn test_cycle_frontier() {
        let mut table = Table::from_codes(config(), ["ggggxx"]).unwrap();
        assert_eq!(table.cycle_frontier(CycleDirection::Forward), None);

        let tile = table.draw().unwrap();
        table.place(tile, P0, Coord::ORIGIN).unwrap();

        assert_eq!(table.cycle_frontier(CycleDirection::Forward), Some(Coord::new(-1, 0)));
        assert_eq!(table.cycle_frontier(CycleDirection::Forward), Some(Coord::new(0, 1)));
        assert_eq!(table.frontier().selected(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_seed_derived_from_names_when_unset() {
        let config = TableConfig::new().with_player("Ada").with_player("Grace");
        let expected = derive_seed(&config.players);
        let table = Table::empty(config);
        assert_eq!(table.seed(), expected);
    }

    #[test]
    fn test_same_seed_same_pile() {
        let codes = ["ggggxx", "rrrrxx", "ccccxx", "ssssxx", "crgsxx", "gcgcxx"];
        let shuffled = TableConfig::new().with_player("Ada").with_seed(11);
        let a = Table::from_codes(shuffled.clone(), codes).unwrap();
        let b = Table::from_codes(shuffled, codes).unwrap();

        let order = |t: &Table| -> Vec<String> {
            t.pile().iter().map(|id| t.tile(id).unwrap().code().to_string()).collect()
        };
        assert_eq!(order(&a), order(&b));
    }

    #[test]
    fn test_legal_placements() {
        let mut table = Table::from_codes(config(), ["ggggxx", "ggggxx"]).unwrap();
        let a = table.draw().unwrap();
        table.place(a, P0, Coord::ORIGIN).unwrap();
        let b = table.draw().unwrap();

        let legal = table.legal_placements(b).unwrap();
        assert_eq!(legal.len(), 16);
        assert!(table.legal_placements(TileId::new(50)).is_err());
    }

    #[test]
    fn test_player_lookup() {
        let table = Table::empty(config());
        assert_eq!(table.players().len(), 2);
        assert_eq!(table.player(PlayerId::new(1)).unwrap().name(), "Grace");
        assert!(table.player(PlayerId::new(2)).is_none());
    }
}
