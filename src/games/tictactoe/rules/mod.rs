//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Classification here is reused
//! for end-of-game detection and as the leaf test of the search.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completed_lines, LINES};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Terminal status of a board, derived from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A line of three is complete for this mark.
    Won(Mark),
    /// Every cell is occupied and no line is complete.
    Draw,
    /// The game can continue.
    Ongoing,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "Player {} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
            Outcome::Ongoing => write!(f, "Game in progress"),
        }
    }
}

/// Classifies the board as won, drawn, or ongoing.
///
/// Lines are checked before fullness, so a full board with a completed
/// line is a win, not a draw. Boards with winning lines for both marks are
/// a caller error; the first line in [`LINES`] order decides.
pub fn classify(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
