//! Game state and turn alternation for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{Outcome, classify};
use super::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// A single game: the board, the side to move, and what has been played.
///
/// The game owns its board for its whole life. Turn alternation is
/// enforced here, not by the board or the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the side-to-move's mark at `pos`.
    ///
    /// Returns the outcome after the move. The turn passes to the opponent
    /// only while the game is still ongoing.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game has already ended.
    /// - `MoveError::SquareOccupied` if `pos` is not empty.
    #[instrument(skip(self), fields(position = %pos, mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        self.outcome = classify(&self.board);
        debug!(outcome = ?self.outcome, moves = self.history.len(), "Move applied");

        if !self.is_over() {
            self.to_move = mark.opponent();
        }

        Ok(self.outcome)
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first `MoveError` hit while replaying.
    #[instrument(skip(positions))]
    pub fn replay(first: Mark, positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(first);
        for &pos in positions {
            game.place(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}
