//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a side.
///
/// `X` is the maximizing side of the search (the engine), `O` the
/// minimizing side (the human).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Engine mark, maximized by the search.
    X,
    /// Human mark, minimized by the search.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns true for the side the search maximizes.
    pub fn is_maximizing(self) -> bool {
        self == Mark::X
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Single-character symbol used when rendering.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// No occupancy check happens here; callers applying a move go through
    /// `Game::place`, and the search restores every cell it probes.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(mark))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.squares.chunks(3) {
            writeln!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
            writeln!(f, "-----")?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
    /// A cell symbol was not one of `X`, `O`, `.`, `_` or `-`.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine row-major cells, e.g. `"XO./.X./..O"`.
    ///
    /// Whitespace, `|` and `/` are separators and ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Mark::X)),
                'O' => Ok(Square::Occupied(Mark::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(ParseBoardError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongCellCount(cells.len()))?;

        Ok(Self { squares })
    }
}
