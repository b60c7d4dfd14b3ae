//! Search error types.

use derive_more::Display;

/// Reasons the search refuses a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// Both marks own a completed line, which legal play cannot reach.
    #[display("Invalid board state: both marks have three in a row")]
    InvalidBoardState,

    /// The board has no empty cell to play.
    #[display("No move available: the board is full")]
    NoMoveAvailable,
}

impl std::error::Error for SearchError {}
