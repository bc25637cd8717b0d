//! Command-line interface for oxo.

use clap::{Parser, Subcommand, ValueEnum};
use oxo_engine::Player;

/// Oxo - optimal tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine
    Play {
        /// Side to play as
        #[arg(long = "as", value_enum, default_value_t = Side::X)]
        side: Side,
    },

    /// Watch the engine play itself from the empty board
    Demo,
}

/// The side a human can take.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Play X (moves first).
    X,
    /// Play O (moves second).
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
