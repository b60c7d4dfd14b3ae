//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines of three, in classification precedence:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Mark owning the given line, if all three cells hold it.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(mark)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order,
/// `None` if no line is complete.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Owners of every completed line, in [`LINES`] order.
///
/// A legally reached board yields at most one distinct mark here.
#[instrument]
pub fn completed_lines(board: &Board) -> Vec<Mark> {
    LINES
        .into_iter()
        .filter_map(|line| line_owner(board, line))
        .collect()
}
