//! Table configuration.
//!
//! A table is configured once, at session start, with:
//! - the seated players
//! - an explicit RNG seed (or none, to derive one from player names)
//! - the tileset files that make up the draw pile
//!
//! Nothing here is read again after the table is built.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

/// Default starting capacity for tile containers.
pub const DEFAULT_STACK_CAPACITY: usize = 12;

/// Complete table configuration.
///
/// ## Example
///
/// ```
/// use rust_carc::core::TableConfig;
///
/// let config = TableConfig::new()
///     .with_player("Ada")
///     .with_player("Grace")
///     .with_seed(7)
///     .with_tileset("tilesets/base.carc");
///
/// assert_eq!(config.players.len(), 2);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.shuffle);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seated players, in turn order.
    pub players: Vec<Player>,

    /// RNG seed. `None` derives one from the player names.
    pub seed: Option<u64>,

    /// Tileset files loaded into the draw pile, in order.
    pub tilesets: Vec<PathBuf>,

    /// Shuffle the draw pile after loading.
    pub shuffle: bool,

    /// Starting capacity of the draw pile and board registry.
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            seed: None,
            tilesets: Vec::new(),
            shuffle: true,
            initial_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl TableConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat another player. IDs are assigned in seating order.
    ///
    /// Panics past 255 players.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        assert!(self.players.len() < 255, "At most 255 players supported");
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name));
        self
    }

    /// Use an explicit seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a tileset file to the draw pile.
    #[must_use]
    pub fn with_tileset(mut self, path: impl Into<PathBuf>) -> Self {
        self.tilesets.push(path.into());
        self
    }

    /// Keep the draw pile in file order instead of shuffling it.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Set the starting container capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::new();
        assert!(config.players.is_empty());
        assert_eq!(config.seed, None);
        assert!(config.shuffle);
        assert_eq!(config.initial_capacity, DEFAULT_STACK_CAPACITY);
    }

    #[test]
    fn test_player_ids_follow_seating() {
        let config = TableConfig::new().with_player("A").with_player("B").with_player("C");

        let ids: Vec<_> = config.players.iter().map(Player::id).collect();
        assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(config.player_count(), 3);
    }

    #[test]
    fn test_builder_chain() {
        let config = TableConfig::new()
            .with_seed(99)
            .with_tileset("a.carc")
            .with_tileset("b.carc")
            .unshuffled()
            .with_capacity(100);

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.tilesets, vec![PathBuf::from("a.carc"), PathBuf::from("b.carc")]);
        assert!(!config.shuffle);
        assert_eq!(config.initial_capacity, 100);
    }
}
