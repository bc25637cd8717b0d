//! Oxo - terminal front-end for the minimax tic-tac-toe engine.
//!
//! The engine itself is pure; everything interactive lives here. The
//! driver loop is the intended shape for any front-end: build the
//! initial board, alternate `apply` (human) and `best_move` (engine)
//! until the board is terminal, then report the outcome.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, Side};
use oxo_engine::{Board, Move, Player, best_move};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { side } => run_game(side),
        Command::Demo => run_demo(),
    }
}

/// Interactive game: the human takes one side, the engine the other.
fn run_game(side: Side) -> Result<()> {
    let human: Player = side.into();
    info!(%human, "starting interactive game");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::new();

    while !board.is_terminal() {
        if board.to_move() == human {
            println!("\n{board}");
            board = match board.apply(read_move(&mut lines, human)?) {
                Ok(next) => next,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
        } else {
            let mv = best_move(&board).expect("non-terminal board has a best move");
            debug!(%mv, "engine move");
            println!("\nengine plays {mv}");
            board = board.apply(mv)?;
        }
    }

    println!("\n{board}");
    println!("\nresult: {}", board.outcome());
    Ok(())
}

/// Engine vs. engine from the empty board. Always ends in a draw.
fn run_demo() -> Result<()> {
    let mut board = Board::new();
    while let Some(mv) = best_move(&board) {
        println!("{} plays {mv}", board.to_move());
        board = board.apply(mv)?;
        println!("{board}\n");
    }
    println!("result: {}", board.outcome());
    Ok(())
}

/// Prompts until the human enters a parseable `row col` pair.
///
/// Legality is the board's call, not ours; this only gets the input
/// into `Move` shape.
fn read_move(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    player: Player,
) -> Result<Move> {
    loop {
        print!("{player} to move (row col): ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            bail!("stdin closed before the game finished");
        };
        let line = line.context("failed to read move")?;

        match parse_move(&line) {
            Some(mv) => return Ok(mv),
            None => println!("expected two numbers 0-2, e.g. `1 1`"),
        }
    }
}

fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::parse_move;
    use oxo_engine::Move;

    #[test]
    fn test_parse_move_accepts_row_col() {
        assert_eq!(parse_move("1 2"), Some(Move::new(1, 2)));
        assert_eq!(parse_move("  0   0 "), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("one two"), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
    }
}
