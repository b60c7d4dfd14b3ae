//! Tests for minimax move selection.

use strictly_minimax::{
    Board, DRAW_SCORE, Mark, Outcome, Position, SearchError, Square, WIN_SCORE, best_move_for,
    classify, evaluate_moves, find_best_move,
};

fn board(text: &str) -> Board {
    text.parse().expect("Valid board")
}

#[test]
fn test_empty_board_opens_top_left() {
    let mut b = Board::new();
    assert_eq!(find_best_move(&mut b), Ok(Position::TopLeft));
}

#[test]
fn test_completes_own_row() {
    let mut b = board("XX./.../...");
    assert_eq!(find_best_move(&mut b), Ok(Position::TopRight));
}

#[test]
fn test_blocks_opponent_row() {
    let mut b = board("OO./.X./...");
    assert_eq!(find_best_move(&mut b), Ok(Position::TopRight));
}

#[test]
fn test_blocks_in_last_cell() {
    // Every other move lets O complete the bottom row.
    let mut b = board(".../.X./OO.");
    assert_eq!(find_best_move(&mut b), Ok(Position::BottomRight));
}

#[test]
fn test_answers_corner_with_center() {
    let mut b = board("O../.../...");
    assert_eq!(find_best_move(&mut b), Ok(Position::Center));
}

#[test]
fn test_answers_opposite_corners_with_edge() {
    // Taking a corner here loses to a fork.
    let mut b = board("O../.X./..O");
    assert_eq!(find_best_move(&mut b), Ok(Position::TopCenter));
}

#[test]
fn test_prefers_first_of_equal_winning_moves() {
    // (1, 0), (1, 1) and (2, 0) all force a win; the first one in
    // row-major order is chosen.
    let mut b = board("XO./.../...");
    let scores = evaluate_moves(&mut b).unwrap();
    let first_win = scores.iter().find(|s| s.score == WIN_SCORE).unwrap();
    assert_eq!(first_win.position, Position::MiddleLeft);
    assert_eq!(find_best_move(&mut b), Ok(Position::MiddleLeft));
}

#[test]
fn test_all_openings_draw() {
    let mut b = Board::new();
    let scores = evaluate_moves(&mut b).unwrap();
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|s| s.score == DRAW_SCORE));
}

#[test]
fn test_full_board_is_draw_and_has_no_move() {
    let mut b = board("XOX/XOO/OXX");
    assert_eq!(classify(&b), Outcome::Draw);
    assert_eq!(find_best_move(&mut b), Err(SearchError::NoMoveAvailable));
}

#[test]
fn test_search_leaves_board_untouched() {
    for text in [".........", "O...X...O", "XO.O.X...", "OO..X...."] {
        let mut b = board(text);
        let before = b;
        find_best_move(&mut b).unwrap();
        assert_eq!(b, before, "board {text} changed by search");
        evaluate_moves(&mut b).unwrap();
        assert_eq!(b, before, "board {text} changed by evaluation");
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut b = board("X../O../...");
    let first = find_best_move(&mut b).unwrap();
    for _ in 0..3 {
        assert_eq!(find_best_move(&mut b), Ok(first));
    }
}

/// Every reachable position where X is to move, with O having opened.
fn x_to_move_positions(b: &mut Board, to_move: Mark, out: &mut Vec<Board>) {
    if classify(b) != Outcome::Ongoing {
        return;
    }
    if to_move == Mark::X {
        out.push(*b);
    }
    for pos in Position::ALL {
        if b.is_empty(pos) {
            b.set(pos, Square::Occupied(to_move));
            x_to_move_positions(b, to_move.opponent(), out);
            b.set(pos, Square::Empty);
        }
    }
}

#[test]
fn test_never_targets_occupied_cell() {
    let mut positions = Vec::new();
    x_to_move_positions(&mut Board::new(), Mark::O, &mut positions);
    assert!(!positions.is_empty());

    // A sample of the reachable positions keeps the debug-build run short.
    for mut b in positions.into_iter().step_by(37) {
        let pos = find_best_move(&mut b).unwrap();
        assert!(b.is_empty(pos));
    }
}

/// Plays every O continuation against the engine, failing if X ever loses.
fn engine_never_loses(b: &mut Board, to_move: Mark) {
    match classify(b) {
        Outcome::Won(Mark::O) => panic!("Engine lost on\n{b}"),
        Outcome::Won(Mark::X) | Outcome::Draw => return,
        Outcome::Ongoing => {}
    }

    match to_move {
        Mark::X => {
            let pos = find_best_move(b).unwrap();
            b.set(pos, Square::Occupied(Mark::X));
            engine_never_loses(b, Mark::O);
            b.set(pos, Square::Empty);
        }
        Mark::O => {
            for pos in Position::ALL {
                if b.is_empty(pos) {
                    b.set(pos, Square::Occupied(Mark::O));
                    engine_never_loses(b, Mark::X);
                    b.set(pos, Square::Empty);
                }
            }
        }
    }
}

#[test]
fn test_engine_never_loses_when_human_opens() {
    engine_never_loses(&mut Board::new(), Mark::O);
}

#[test]
fn test_engine_never_loses_when_engine_opens() {
    engine_never_loses(&mut Board::new(), Mark::X);
}

#[test]
fn test_perfect_play_from_empty_board_draws() {
    let mut b = Board::new();
    let mut to_move = Mark::X;
    while classify(&b) == Outcome::Ongoing {
        let pos = best_move_for(&mut b, to_move).unwrap();
        b.set(pos, Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
    assert_eq!(classify(&b), Outcome::Draw);
}
