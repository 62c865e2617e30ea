//! Placement engine.
//!
//! ## Key Types
//!
//! - `Board`: placed-tile registry plus frontier; validates and commits
//! - `Placement`: what a committed placement changed
//! - `BoardView`: read-only board access for renderers and hooks
//! - `CompletionHook`: called after each committed placement

mod board;
mod hook;

pub use board::{Board, BoardView, Neighbors, Placement};
pub use hook::CompletionHook;
