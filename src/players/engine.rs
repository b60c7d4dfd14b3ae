//! Automated player backed by the minimax search.

use super::Player;
use crate::games::tictactoe::{Board, Mark, Position};
use crate::search::find_best_move;
use anyhow::Result;
use tracing::{debug, instrument};

/// Plays X with perfect minimax play.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, board), fields(engine = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        // Search on a private copy so the game's board is never borrowed
        // mutably by the engine.
        let mut scratch = *board;
        let position = find_best_move(&mut scratch)?;
        debug!(position = %position, "Engine chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        Mark::X
    }
}
