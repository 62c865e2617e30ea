//! Tile terrain data: edges, features, and alt-features.
//!
//! Each enum has a fixed single-character alphabet used by tile codes.
//! The mappings are exhaustive in both directions: every variant has one
//! character and every other character is rejected.

use serde::{Deserialize, Serialize};

/// Terrain presented by one side of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    #[default]
    None,
    City,
    Grass,
    River,
    Road,
}

impl Edge {
    /// Parse a tile-code character.
    ///
    /// ```
    /// use rust_carc::tiles::Edge;
    ///
    /// assert_eq!(Edge::from_char('s'), Some(Edge::River));
    /// assert_eq!(Edge::from_char('q'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Edge::None),
            'c' => Some(Edge::City),
            'g' => Some(Edge::Grass),
            's' => Some(Edge::River),
            'r' => Some(Edge::Road),
            _ => None,
        }
    }

    /// The tile-code character for this edge.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Edge::None => 'x',
            Edge::City => 'c',
            Edge::Grass => 'g',
            Edge::River => 's',
            Edge::Road => 'r',
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Edge::None => "none",
            Edge::City => "city",
            Edge::Grass => "grass",
            Edge::River => "river",
            Edge::Road => "road",
        };
        f.write_str(name)
    }
}

/// Scoring-relevant structure at the center of a tile.
///
/// `Shield` marks a city tile worth extra; interpreting it is left to
/// scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[default]
    None,
    City,
    Monastery,
    Shield,
    Village,
}

impl Feature {
    /// Parse a tile-code character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Feature::None),
            'c' => Some(Feature::City),
            'm' => Some(Feature::Monastery),
            's' => Some(Feature::Shield),
            'v' => Some(Feature::Village),
            _ => None,
        }
    }

    /// The tile-code character for this feature.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Feature::None => 'x',
            Feature::City => 'c',
            Feature::Monastery => 'm',
            Feature::Shield => 's',
            Feature::Village => 'v',
        }
    }
}

/// Secondary modifier tag on a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltFeature {
    #[default]
    None,
    Farmhouse,
    Garden,
    Highwayman,
    Lake,
    Source,
    Stable,
    Tower,
}

impl AltFeature {
    /// Parse a tile-code character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(AltFeature::None),
            'f' => Some(AltFeature::Farmhouse),
            'g' => Some(AltFeature::Garden),
            'h' => Some(AltFeature::Highwayman),
            'l' => Some(AltFeature::Lake),
            'r' => Some(AltFeature::Source),
            's' => Some(AltFeature::Stable),
            't' => Some(AltFeature::Tower),
            _ => None,
        }
    }

    /// The tile-code character for this alt-feature.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            AltFeature::None => 'x',
            AltFeature::Farmhouse => 'f',
            AltFeature::Garden => 'g',
            AltFeature::Highwayman => 'h',
            AltFeature::Lake => 'l',
            AltFeature::Source => 'r',
            AltFeature::Stable => 's',
            AltFeature::Tower => 't',
        }
    }
}
