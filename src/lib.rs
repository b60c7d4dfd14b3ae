//! Strictly Minimax library - tic-tac-toe with a perfect opponent
//!
//! The engine plays X and chooses every move by exhaustive minimax search;
//! the human plays O.
//!
//! # Architecture
//!
//! - **Games**: board, rules (`classify`, `is_full`) and turn-alternating game state
//! - **Search**: minimax scoring and best-move selection
//! - **Players**: engine and line-input human players
//! - **Orchestrator**: the turn loop and terminal rendering
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Position, find_best_move};
//!
//! let mut board: Board = "XX./.O./..O".parse().unwrap();
//! assert_eq!(find_best_move(&mut board), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, Mark, Move, MoveError, Outcome, ParseBoardError, Position, Square, classify,
    is_full,
};

// Crate-level exports - Rules beyond classification
pub use games::tictactoe::rules::{check_winner, completed_lines, is_draw};

// Crate-level exports - Search
pub use search::{
    DRAW_SCORE, LOSS_SCORE, MoveScore, Score, SearchError, WIN_SCORE, best_move_for,
    evaluate_moves, find_best_move, score,
};

// Crate-level exports - Players and turn loop
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player};
