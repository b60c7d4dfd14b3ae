//! Exhaustive minimax search for tic-tac-toe.
//!
//! The search probes candidate moves by writing into the board and
//! restoring each cell before trying the next, so callers get their board
//! back unchanged. Nothing is retained between calls.

mod error;
mod minimax;

pub use error::SearchError;
pub use minimax::{
    DRAW_SCORE, LOSS_SCORE, MoveScore, Score, WIN_SCORE, best_move_for, evaluate_moves,
    find_best_move, score,
};
