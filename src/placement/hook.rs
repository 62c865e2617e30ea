//! Completion hook invoked after every successful placement.
//!
//! Scoring (closing cities, finished roads, surrounded monasteries) lives
//! outside the placement engine. The engine only promises to call the hook
//! once per committed placement, after the board is fully updated.

use super::board::BoardView;
use crate::tiles::Tile;

/// Receives each newly placed tile together with the board it joined.
///
/// Closures implement this trait directly:
///
/// ```
/// use rust_carc::placement::{BoardView, CompletionHook};
/// use rust_carc::tiles::Tile;
///
/// fn count_tiles(hook: &mut impl CompletionHook) {}
///
/// let mut largest = 0;
/// count_tiles(&mut |_: &Tile, board: BoardView<'_>| largest = largest.max(board.len()));
/// ```
pub trait CompletionHook {
    /// Called after `placed` has been linked, registered, and removed from
    /// the frontier.
    fn on_placed(&mut self, placed: &Tile, board: BoardView<'_>);
}

impl<F> CompletionHook for F
where
    F: FnMut(&Tile, BoardView<'_>),
{
    fn on_placed(&mut self, placed: &Tile, board: BoardView<'_>) {
        (*self)(placed, board);
    }
}
