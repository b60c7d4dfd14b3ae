//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::Result;

/// A side that can choose moves.
pub trait Player {
    /// Chooses a move on `board`.
    ///
    /// The returned position must name an empty cell.
    fn choose_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Mark this player places.
    fn mark(&self) -> Mark;
}
