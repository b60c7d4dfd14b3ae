mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{Outcome, classify, is_full};
pub use types::{Board, Mark, ParseBoardError, Square};
