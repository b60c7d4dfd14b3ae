//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, addressed by (row, column).
///
/// Variants are declared in row-major order, so iteration order is the
/// order the search visits candidate moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, column 1
    TopCenter,
    /// Row 0, column 2
    TopRight,
    /// Row 1, column 0
    MiddleLeft,
    /// Row 1, column 1
    Center,
    /// Row 1, column 2
    MiddleRight,
    /// Row 2, column 0
    BottomLeft,
    /// Row 2, column 1
    BottomCenter,
    /// Row 2, column 2
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a (row, column) pair, each in 0..3.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The (row, column) pair.
    pub fn row_col(self) -> (usize, usize) {
        (self.row(), self.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
