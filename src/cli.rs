//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal (you are O, the engine is X)
    Play {
        /// Path to a TOML game config; defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the engine open the game
        #[arg(long)]
        engine_first: bool,
    },

    /// Print the engine's move for X on a board
    BestMove {
        /// Nine cells row-major, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: String,
    },

    /// Print the minimax score of every legal X move on a board
    Analyze {
        /// Nine cells row-major, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print whether a board is won, drawn, or ongoing
    Classify {
        /// Nine cells row-major, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: String,
    },
}
