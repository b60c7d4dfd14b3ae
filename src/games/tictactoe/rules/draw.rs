//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
