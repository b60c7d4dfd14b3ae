//! Strictly Minimax - Unified CLI
//!
//! Play tic-tac-toe against the engine, or query the engine about a board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use strictly_minimax::{
    Board, EnginePlayer, GameConfig, HumanPlayer, Orchestrator, classify, evaluate_moves,
    find_best_move,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            engine_first,
        } => run_play(config, engine_first),
        Command::BestMove { board } => {
            init_tracing("warn");
            run_best_move(&board)
        }
        Command::Analyze { board, json } => {
            init_tracing("warn");
            run_analyze(&board, json)
        }
        Command::Classify { board } => {
            init_tracing("warn");
            run_classify(&board)
        }
    }
}

/// Installs the fmt subscriber on stderr; `RUST_LOG` wins over `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("Invalid board {:?}", text))
}

/// Run an interactive game on stdin/stdout
fn run_play(config_path: Option<PathBuf>, engine_first: bool) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if engine_first {
        config = config.with_engine_first();
    }

    init_tracing(config.log_filter());
    info!(?config_path, first_player = ?config.first_player(), "Starting interactive game");

    let stdin = io::stdin();
    let engine = EnginePlayer::new(config.engine_name().as_str());
    let human = HumanPlayer::new(config.human_name().as_str(), stdin.lock(), io::stdout());

    let mut orchestrator = Orchestrator::new(
        config.first_player().mark(),
        Box::new(engine),
        Box::new(human),
        io::stdout(),
    )?;
    orchestrator.run()?;

    Ok(())
}

#[instrument]
fn run_best_move(board: &str) -> Result<()> {
    let mut board = parse_board(board)?;
    let position = find_best_move(&mut board)?;
    println!("{}", position);
    Ok(())
}

#[instrument]
fn run_analyze(board: &str, json: bool) -> Result<()> {
    let mut board = parse_board(board)?;
    let scores = evaluate_moves(&mut board)?;

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &scores)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", board)?;
        for entry in &scores {
            writeln!(
                stdout,
                "{} {:<14} {:+}",
                entry.position,
                entry.position.label(),
                entry.score
            )?;
        }
    }
    Ok(())
}

#[instrument]
fn run_classify(board: &str) -> Result<()> {
    let board = parse_board(board)?;
    println!("{}", classify(&board));
    Ok(())
}
