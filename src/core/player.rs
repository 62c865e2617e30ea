//! Player identification.
//!
//! The engine treats a player as an opaque stamp on placed tiles. Nothing in
//! placement depends on a player's name; the name only exists for display
//! and for the optional name-derived seed (see [`derive_seed`](super::derive_seed)).

use serde::{Deserialize, Serialize};

/// Maximum display name length, in characters.
pub const NAME_LEN: usize = 12;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player: identifier plus display name.
///
/// Names longer than [`NAME_LEN`] characters are truncated.
///
/// ```
/// use rust_carc::core::{Player, PlayerId};
///
/// let p = Player::new(PlayerId::new(0), "Bartholomew the Bold");
/// assert_eq!(p.name(), "Bartholomew ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    /// Create a player, truncating the name to [`NAME_LEN`] characters.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        let mut name = name.into();
        if let Some((cut, _)) = name.char_indices().nth(NAME_LEN) {
            name.truncate(cut);
        }
        Self { id, name }
    }

    /// The player's identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name bytes zero-padded to exactly [`NAME_LEN`] bytes.
    ///
    /// Multi-byte characters may push the byte length past the limit;
    /// only the first `NAME_LEN` bytes are kept.
    #[must_use]
    pub fn name_bytes(&self) -> [u8; NAME_LEN] {
        let mut out = [0u8; NAME_LEN];
        for (slot, byte) in out.iter_mut().zip(self.name.bytes()) {
            *slot = byte;
        }
        out
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_short_name_kept() {
        let p = Player::new(PlayerId::new(1), "Ada");
        assert_eq!(p.name(), "Ada");
        assert_eq!(p.id(), PlayerId::new(1));
        assert_eq!(format!("{}", p), "Ada (Player 1)");
    }

    #[test]
    fn test_long_name_truncated() {
        let p = Player::new(PlayerId::new(0), "abcdefghijklmnop");
        assert_eq!(p.name(), "abcdefghijkl");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let p = Player::new(PlayerId::new(0), "ééééééééééééééé");
        assert_eq!(p.name().chars().count(), NAME_LEN);
    }

    #[test]
    fn test_name_bytes_padded() {
        let p = Player::new(PlayerId::new(0), "Bo");
        let bytes = p.name_bytes();
        assert_eq!(&bytes[..2], b"Bo");
        assert!(bytes[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_player_serialization() {
        let p = Player::new(PlayerId::new(2), "Cleo");
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
