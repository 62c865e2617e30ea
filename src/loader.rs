//! Tileset files.
//!
//! A tileset is plain text: whitespace-separated tile codes, one token per
//! tile. Files are read once, before play starts. A single bad token
//! rejects the whole file so no partial pile is ever built from it.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::tiles::TileCode;

/// Parse the contents of a tileset file.
///
/// `path` is only used to label errors.
///
/// ```
/// use std::path::Path;
/// use rust_carc::loader::parse_tileset;
///
/// let codes = parse_tileset("ggggxx  rrcc_c_x\ncrgsmx\n", Path::new("inline")).unwrap();
/// assert_eq!(codes.len(), 3);
/// ```
pub fn parse_tileset(text: &str, path: &Path) -> Result<Vec<TileCode>, LoadError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<TileCode>().map_err(|source| {
                warn!(path = %path.display(), index, token, "improper tile code");
                LoadError::Parse {
                    path: path.to_path_buf(),
                    index,
                    source,
                }
            })
        })
        .collect()
}

/// Read and parse a tileset file.
pub fn load_tileset(path: impl AsRef<Path>) -> Result<Vec<TileCode>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let codes = parse_tileset(&text, path)?;
    debug!(path = %path.display(), tiles = codes.len(), "tileset loaded");
    Ok(codes)
}
