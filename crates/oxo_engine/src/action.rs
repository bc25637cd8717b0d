//! Moves and the errors that can reject them.

use serde::{Deserialize, Serialize};

/// A move: placing the next mark at `(row, col)`.
///
/// Moves carry coordinates only; the mark that lands there is whatever
/// [`Board::to_move`](crate::Board::to_move) says when the move is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0-2, top to bottom).
    pub row: usize,
    /// Column index (0-2, left to right).
    pub col: usize,
}

impl Move {
    /// Creates a new move. Coordinates are validated when applied,
    /// not here.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move lies outside the 3x3 grid.
    #[display("move ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Move),
}

impl std::error::Error for MoveError {}
