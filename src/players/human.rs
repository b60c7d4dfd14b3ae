//! Human player that reads coordinates from a line-based input.

use super::Player;
use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const INVALID_INPUT: &str = "Invalid input! Please enter 0, 1, or 2.";
const CELL_TAKEN: &str = "Cell already taken! Choose another.";

/// Human player prompting for a row and a column on each turn.
///
/// Bad input is reported on the output and re-prompted; only a closed
/// input stream is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts once and reads one coordinate.
    ///
    /// Returns `Ok(None)` for anything that is not 0, 1 or 2.
    fn read_coordinate(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read player input")?;
        if read == 0 {
            bail!("Input closed");
        }

        Ok(line.trim().parse::<usize>().ok().filter(|&n| n < 3))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        loop {
            let row = self.read_coordinate("Enter row (0, 1, 2): ")?;
            let col = self.read_coordinate("Enter column (0, 1, 2): ")?;

            let Some(position) = row.zip(col).and_then(|(r, c)| Position::from_row_col(r, c))
            else {
                debug!(?row, ?col, "Rejected input");
                writeln!(self.output, "{}", INVALID_INPUT)?;
                continue;
            };

            if !board.is_empty(position) {
                debug!(position = %position, "Rejected occupied cell");
                writeln!(self.output, "{}", CELL_TAKEN)?;
                continue;
            }

            return Ok(position);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        Mark::O
    }
}
