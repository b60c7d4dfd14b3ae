//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark was
//! placed where, so a finished game can be replayed from its history.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} plays at {}", self.mark, self.position)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
