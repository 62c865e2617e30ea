//! Tile records and tile codes.
//!
//! A tile code is six characters, `[edge][edge][edge][edge][feature][alt]`,
//! edges in North, East, South, West order. The underscore-separated form
//! `gggg_x_x` is accepted as well and means the same as `ggggxx`.
//!
//! A [`Tile`] is a parsed code plus placement state: owner, position, and
//! the handles of its placed neighbors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::{AltFeature, Edge, Feature};
use crate::core::{Coord, Direction, PlayerId};
use crate::error::{ParseError, TileError};

/// Number of fields in a tile code.
pub const TILE_CODE_LEN: usize = 6;

/// Stable handle to a tile in a [`TileArena`](super::TileArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the owning arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Which way to turn a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// West edge moves to North.
    Clockwise,
    /// East edge moves to North.
    Counterclockwise,
}

/// The immutable part of a tile: edges, feature, and alt-feature.
///
/// ```
/// use rust_carc::tiles::{Edge, Feature, TileCode};
///
/// let code: TileCode = "rrcc_c_x".parse().unwrap();
/// assert_eq!(code.edges, [Edge::Road, Edge::Road, Edge::City, Edge::City]);
/// assert_eq!(code.feature, Feature::City);
/// assert_eq!(code.to_string(), "rrcccx");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCode {
    pub edges: [Edge; 4],
    pub feature: Feature,
    pub alt: AltFeature,
}

impl TileCode {
    /// Create a code from its parts.
    #[must_use]
    pub const fn new(edges: [Edge; 4], feature: Feature, alt: AltFeature) -> Self {
        Self { edges, feature, alt }
    }

    /// This code with its edges turned one step.
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => self.edges.rotate_right(1),
            Rotation::Counterclockwise => self.edges.rotate_left(1),
        }
        self
    }
}

impl FromStr for TileCode {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let chars: SmallVec<[char; 8]> = code.chars().collect();
        let fields: SmallVec<[char; TILE_CODE_LEN]> = match chars.len() {
            TILE_CODE_LEN => chars.iter().copied().collect(),
            8 if chars[4] == '_' && chars[6] == '_' => {
                [chars[0], chars[1], chars[2], chars[3], chars[5], chars[7]]
                    .into_iter()
                    .collect()
            }
            len => {
                return Err(ParseError::Length {
                    code: code.to_string(),
                    len,
                })
            }
        };

        let bad = |position: usize, field: &'static str| ParseError::Character {
            code: code.to_string(),
            position,
            field,
            found: fields[position],
        };

        let mut edges = [Edge::None; 4];
        for (i, slot) in edges.iter_mut().enumerate() {
            *slot = Edge::from_char(fields[i]).ok_or_else(|| bad(i, "edge"))?;
        }
        let feature = Feature::from_char(fields[4]).ok_or_else(|| bad(4, "feature"))?;
        let alt = AltFeature::from_char(fields[5]).ok_or_else(|| bad(5, "alt-feature"))?;

        Ok(Self { edges, feature, alt })
    }
}

impl std::fmt::Display for TileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for edge in self.edges {
            write!(f, "{}", edge.as_char())?;
        }
        write!(f, "{}{}", self.feature.as_char(), self.alt.as_char())
    }
}

/// A tile in play.
///
/// Tiles are owned by a [`TileArena`](super::TileArena); neighbor slots
/// hold handles into the same arena, never owning references. If slot `i`
/// holds `b`, then `b`'s slot `(i + 2) % 4` holds this tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    code: TileCode,
    player: Option<PlayerId>,
    near: [Option<TileId>; 4],
    position: Option<Coord>,
}

impl Tile {
    /// Create an unplaced tile.
    #[must_use]
    pub fn new(id: TileId, code: TileCode) -> Self {
        Self {
            id,
            code,
            player: None,
            near: [None; 4],
            position: None,
        }
    }

    /// This tile's handle.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Edges, feature, and alt-feature in their current rotation.
    #[must_use]
    pub const fn code(&self) -> TileCode {
        self.code
    }

    /// The four edges in North, East, South, West order.
    #[must_use]
    pub const fn edges(&self) -> [Edge; 4] {
        self.code.edges
    }

    /// The edge facing `direction`.
    #[must_use]
    pub const fn edge(&self, direction: Direction) -> Edge {
        self.code.edges[direction.index()]
    }

    #[must_use]
    pub const fn feature(&self) -> Feature {
        self.code.feature
    }

    #[must_use]
    pub const fn alt(&self) -> AltFeature {
        self.code.alt
    }

    /// The player who placed this tile, once placed.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        self.player
    }

    /// Board position, once placed.
    #[must_use]
    pub const fn position(&self) -> Option<Coord> {
        self.position
    }

    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// The placed neighbor in `direction`, if any.
    #[must_use]
    pub const fn neighbor(&self, direction: Direction) -> Option<TileId> {
        self.near[direction.index()]
    }

    /// All four neighbor slots in North, East, South, West order.
    #[must_use]
    pub const fn neighbors(&self) -> [Option<TileId>; 4] {
        self.near
    }

    /// Turn the tile one step.
    ///
    /// Fails once the tile is placed: its edges are matched against the
    /// board and must not change underneath it.
    pub fn rotate(&mut self, rotation: Rotation) -> Result<(), TileError> {
        if let Some(at) = self.position {
            return Err(TileError::AlreadyPlaced { tile: self.id, at });
        }
        self.code = self.code.rotated(rotation);
        Ok(())
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, tile: Option<TileId>) {
        self.near[direction.index()] = tile;
    }

    pub(crate) fn place(&mut self, player: PlayerId, at: Coord) {
        self.player = Some(player);
        self.position = Some(at);
    }

    /// Forget position and owner. Neighbor slots are cleared separately.
    pub(crate) fn lift(&mut self) {
        self.player = None;
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(code: &str) -> Tile {
        Tile::new(TileId::new(0), code.parse().unwrap())
    }

    #[test]
    fn test_parse_compact() {
        let code: TileCode = "crgsmt".parse().unwrap();
        assert_eq!(code.edges, [Edge::City, Edge::Road, Edge::Grass, Edge::River]);
        assert_eq!(code.feature, Feature::Monastery);
        assert_eq!(code.alt, AltFeature::Tower);
    }

    #[test]
    fn test_parse_separated() {
        let code: TileCode = "gggg_x_x".parse().unwrap();
        assert_eq!(code, "ggggxx".parse().unwrap());
    }

    #[test]
    fn test_parse_bad_edge_names_position() {
        let err = "ggqgxx".parse::<TileCode>().unwrap_err();
        assert_eq!(
            err,
            ParseError::Character {
                code: "ggqgxx".into(),
                position: 2,
                field: "edge",
                found: 'q',
            }
        );
    }

    #[test]
    fn test_parse_bad_feature_and_alt() {
        let err = "ggggzx".parse::<TileCode>().unwrap_err();
        assert!(matches!(err, ParseError::Character { position: 4, field: "feature", .. }));

        let err = "gggg_x_z".parse::<TileCode>().unwrap_err();
        assert!(matches!(err, ParseError::Character { position: 5, found: 'z', .. }));
    }

    #[test]
    fn test_parse_bad_length() {
        assert_eq!(
            "gggg".parse::<TileCode>().unwrap_err(),
            ParseError::Length { code: "gggg".into(), len: 4 }
        );
        assert!(matches!(
            "ggggxxx".parse::<TileCode>(),
            Err(ParseError::Length { len: 7, .. })
        ));
        // Eight characters without separators is not the long form.
        assert!(matches!(
            "ggggxxxx".parse::<TileCode>(),
            Err(ParseError::Length { len: 8, .. })
        ));
    }

    #[test]
    fn test_display_is_compact() {
        assert_eq!(tile("rrcc_c_x").code().to_string(), "rrcccx");
    }

    #[test]
    fn test_new_tile_is_unplaced() {
        let t = tile("ggggxx");
        assert!(!t.is_placed());
        assert_eq!(t.position(), None);
        assert_eq!(t.player(), None);
        assert_eq!(t.neighbors(), [None; 4]);
    }

    #[test]
    fn test_rotate_clockwise() {
        let mut t = tile("crgsxx");
        t.rotate(Rotation::Clockwise).unwrap();
        assert_eq!(t.edges(), [Edge::River, Edge::City, Edge::Road, Edge::Grass]);
    }

    #[test]
    fn test_rotate_counterclockwise() {
        let mut t = tile("crgsxx");
        t.rotate(Rotation::Counterclockwise).unwrap();
        assert_eq!(t.edges(), [Edge::Road, Edge::Grass, Edge::River, Edge::City]);
    }

    #[test]
    fn test_rotation_keeps_feature() {
        let mut t = tile("crgsmt");
        t.rotate(Rotation::Clockwise).unwrap();
        assert_eq!(t.feature(), Feature::Monastery);
        assert_eq!(t.alt(), AltFeature::Tower);
    }

    #[test]
    fn test_four_rotations_identity() {
        for rotation in [Rotation::Clockwise, Rotation::Counterclockwise] {
            let mut t = tile("crgsxx");
            let before = t.edges();
            for _ in 0..4 {
                t.rotate(rotation).unwrap();
            }
            assert_eq!(t.edges(), before);
        }
    }

    #[test]
    fn test_rotate_after_place_rejected() {
        let mut t = tile("crgsxx");
        t.place(PlayerId::new(0), Coord::new(2, 3));

        let err = t.rotate(Rotation::Clockwise).unwrap_err();
        assert_eq!(err, TileError::AlreadyPlaced { tile: TileId::new(0), at: Coord::new(2, 3) });
        assert_eq!(t.edges(), [Edge::City, Edge::Road, Edge::Grass, Edge::River]);
    }

    #[test]
    fn test_lift_clears_placement() {
        let mut t = tile("ggggxx");
        t.place(PlayerId::new(1), Coord::new(0, 1));
        t.lift();
        assert!(!t.is_placed());
        assert_eq!(t.player(), None);
    }
}
