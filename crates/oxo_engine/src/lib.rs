//! Tic-tac-toe board model and optimal play via exhaustive minimax.
//!
//! The crate is a pure functional core: boards are immutable values,
//! applying a move yields a new board, and the search walks the full
//! game tree. Presentation (text, graphics, input) belongs to callers.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{best_move, Board, Outcome};
//!
//! let mut board = Board::new();
//! while let Some(mv) = best_move(&board) {
//!     board = board.apply(mv)?;
//! }
//! // Perfect play from both sides always draws.
//! assert_eq!(board.outcome(), Outcome::Draw);
//! # Ok::<(), oxo_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use search::best_move;
pub use types::{Board, Cell, Outcome, Player};
