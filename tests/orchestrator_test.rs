//! Tests for the turn loop between the engine and a scripted human.

use std::io::Cursor;
use strictly_minimax::{
    EnginePlayer, HumanPlayer, Mark, Move, Orchestrator, Outcome, Player, Position,
};

fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    HumanPlayer::new("Scripted", Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_engine_punishes_weak_human() {
    // The human always takes the first free cell.
    let script = "0\n0\n0\n1\n1\n0\n";
    let mut output = Vec::new();

    let mut orchestrator = Orchestrator::new(
        Mark::O,
        Box::new(EnginePlayer::new("Engine")),
        Box::new(human(script)),
        &mut output,
    )
    .unwrap();

    let outcome = orchestrator.run().unwrap();
    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert_eq!(
        orchestrator.game().history(),
        &[
            Move::new(Mark::O, Position::TopLeft),
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopCenter),
            Move::new(Mark::X, Position::TopRight),
            Move::new(Mark::O, Position::MiddleLeft),
            Move::new(Mark::X, Position::BottomLeft),
        ]
    );
    drop(orchestrator);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Player X plays at (1, 1)"));
    assert!(text.ends_with("O|O|X\n-----\nO|X| \n-----\nX| | \n-----\nPlayer X wins!\n"));
}

#[test]
fn test_engine_first_against_best_defence_draws() {
    let script = "1\n1\n0\n2\n1\n0\n2\n1\n";
    let mut output = Vec::new();

    let mut orchestrator = Orchestrator::new(
        Mark::X,
        Box::new(EnginePlayer::new("Engine")),
        Box::new(human(script)),
        &mut output,
    )
    .unwrap();

    assert_eq!(orchestrator.run().unwrap(), Outcome::Draw);
    assert_eq!(orchestrator.game().history().len(), 9);
    assert_eq!(
        orchestrator.game().history()[0],
        Move::new(Mark::X, Position::TopLeft)
    );
    drop(orchestrator);

    let text = String::from_utf8(output).unwrap();
    assert!(text.ends_with("It's a draw!\n"));
}

#[test]
fn test_rejects_swapped_marks() {
    struct FakeX;

    impl Player for FakeX {
        fn choose_move(&mut self, _board: &strictly_minimax::Board) -> anyhow::Result<Position> {
            anyhow::bail!("never asked")
        }

        fn name(&self) -> &str {
            "FakeX"
        }

        fn mark(&self) -> Mark {
            Mark::X
        }
    }

    let result = Orchestrator::new(
        Mark::X,
        Box::new(FakeX),
        Box::new(FakeX),
        Vec::new(),
    );
    assert!(result.is_err());
}

#[test]
fn test_human_input_closing_aborts_game() {
    let mut orchestrator = Orchestrator::new(
        Mark::O,
        Box::new(EnginePlayer::new("Engine")),
        Box::new(human("1\n")),
        Vec::new(),
    )
    .unwrap();

    assert!(orchestrator.run().is_err());
    assert!(orchestrator.game().history().is_empty());
}
