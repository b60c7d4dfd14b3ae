//! Minimax scoring and move selection.

use super::error::SearchError;
use crate::games::tictactoe::rules::completed_lines;
use crate::games::tictactoe::{Board, Mark, Outcome, Position, Square, classify, is_full};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position from X's point of view.
pub type Score = i8;

/// X has (or can force) three in a row.
pub const WIN_SCORE: Score = 1;
/// O has (or can force) three in a row.
pub const LOSS_SCORE: Score = -1;
/// Neither side can force a win.
pub const DRAW_SCORE: Score = 0;

/// A candidate move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell the mark is placed on.
    pub position: Position,
    /// Score of the board after the move, with both sides playing on optimally.
    pub score: Score,
}

/// Per-call search bookkeeping. Dropped when the top-level call returns.
struct Search {
    nodes: u64,
}

impl Search {
    fn new() -> Self {
        Self { nodes: 0 }
    }

    fn score(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        match classify(board) {
            Outcome::Won(Mark::X) => return WIN_SCORE,
            Outcome::Won(Mark::O) => return LOSS_SCORE,
            Outcome::Draw => return DRAW_SCORE,
            Outcome::Ongoing => {}
        }

        let mark = if maximizing { Mark::X } else { Mark::O };
        // Ongoing guarantees at least one empty cell, so the sentinel is
        // always replaced.
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mark));
            let child = self.score(board, !maximizing);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(child)
            } else {
                best.min(child)
            };
        }

        best
    }

    /// Scores `mark` played on each empty cell, in row-major order.
    fn probe(&mut self, board: &mut Board, mark: Mark) -> Vec<MoveScore> {
        let reply_maximizes = mark.opponent().is_maximizing();
        let mut scores = Vec::with_capacity(9);

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }
            board.set(position, Square::Occupied(mark));
            let score = self.score(board, reply_maximizes);
            board.set(position, Square::Empty);

            scores.push(MoveScore { position, score });
        }

        scores
    }
}

/// Rejects boards the search has no answer for.
fn validate(board: &Board) -> Result<(), SearchError> {
    let lines = completed_lines(board);
    if lines.contains(&Mark::X) && lines.contains(&Mark::O) {
        return Err(SearchError::InvalidBoardState);
    }
    if is_full(board) {
        return Err(SearchError::NoMoveAvailable);
    }
    Ok(())
}

/// Minimax value of `board` with `X` to move if `maximizing`, else `O`.
///
/// Terminal boards score immediately: `WIN_SCORE` for X, `LOSS_SCORE` for O,
/// `DRAW_SCORE` for a full board. Otherwise every empty cell is tried and the
/// best child for the mover is returned. The board is restored before return.
pub fn score(board: &mut Board, maximizing: bool) -> Score {
    Search::new().score(board, maximizing)
}

/// Best move for X, the maximizing side.
///
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current choice, so the first cell reaching the maximum wins.
/// The board is unchanged when this returns.
///
/// # Errors
///
/// - `SearchError::NoMoveAvailable` if the board is full.
/// - `SearchError::InvalidBoardState` if both marks own a completed line.
pub fn find_best_move(board: &mut Board) -> Result<Position, SearchError> {
    best_move_for(board, Mark::X)
}

/// Best move for either side.
///
/// X picks the first strictly greater score, O the first strictly smaller
/// one. `best_move_for(board, Mark::X)` is exactly [`find_best_move`].
///
/// # Errors
///
/// Same as [`find_best_move`].
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn best_move_for(board: &mut Board, mark: Mark) -> Result<Position, SearchError> {
    validate(board)?;

    let mut search = Search::new();
    let mut best: Option<MoveScore> = None;

    for candidate in search.probe(board, mark) {
        let improves = match best {
            None => true,
            Some(current) if mark.is_maximizing() => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };
        if improves {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(SearchError::NoMoveAvailable)?;
    debug!(
        position = %best.position,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );
    Ok(best.position)
}

/// Scores every legal move for X, in row-major order.
///
/// # Errors
///
/// Same as [`find_best_move`].
#[instrument(skip(board))]
pub fn evaluate_moves(board: &mut Board) -> Result<Vec<MoveScore>, SearchError> {
    validate(board)?;

    let mut search = Search::new();
    let scores = search.probe(board, Mark::X);
    debug!(moves = scores.len(), nodes = search.nodes, "Evaluated moves");
    Ok(scores)
}
