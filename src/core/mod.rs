//! Core engine types: coordinates, players, RNG, configuration.
//!
//! These are the building blocks every other module leans on. None of them
//! know anything about tiles.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;

pub use coord::{Coord, Direction};
pub use player::{Player, PlayerId, NAME_LEN};
pub use rng::{derive_seed, GameRng, GameRngState};
pub use config::{TableConfig, DEFAULT_STACK_CAPACITY};
