//! Game orchestration between two players.

use crate::games::tictactoe::{Game, Mark, Outcome};
use crate::players::Player;
use anyhow::{Result, bail};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game between an X player and an O player, rendering to `output`.
pub struct Orchestrator<'a, W> {
    game: Game,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
    output: W,
}

impl<'a, W: Write> Orchestrator<'a, W> {
    /// Creates a new orchestrator with `first` to move.
    ///
    /// # Errors
    ///
    /// Fails if the players' marks are not X and O respectively.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player + 'a>,
        player_o: Box<dyn Player + 'a>,
        output: W,
    ) -> Result<Self> {
        if player_x.mark() != Mark::X || player_o.mark() != Mark::O {
            bail!(
                "Players must play X and O, got {} and {}",
                player_x.mark(),
                player_o.mark()
            );
        }

        Ok(Self {
            game: Game::new(first),
            player_x,
            player_o,
            output,
        })
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop to completion and returns the final outcome.
    #[instrument(skip(self), fields(first = %self.game.to_move()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game"
        );

        while !self.game.is_over() {
            write!(self.output, "{}", self.game.board())?;

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.choose_move(self.game.board())?;
            self.game.place(position)?;

            if mark == Mark::X {
                writeln!(self.output, "Player X plays at {}", position)?;
            }
        }

        let outcome = self.game.outcome();
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()?;

        info!(%outcome, moves = self.game.history().len(), "Game over");
        Ok(outcome)
    }
}
