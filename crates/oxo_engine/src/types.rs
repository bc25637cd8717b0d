//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Result of a finished or ongoing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// X has three in a row.
    XWins,
    /// O has three in a row.
    OWins,
    /// Board is full with no winner.
    Draw,
    /// Moves remain and nobody has won.
    InProgress,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable values: [`Board::apply`] returns a fresh board
/// and never touches the original, so recursive search can fan out over
/// positions without aliasing concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinates, `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Some(self.cells[row * 3 + col])
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub(crate) fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the player who moves next.
    ///
    /// Derived from mark counts rather than a stored turn field: X moves
    /// first and turns alternate, so X is to move exactly when the counts
    /// are level.
    pub fn to_move(&self) -> Player {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);
        if x_count <= o_count {
            Player::X
        } else {
            Player::O
        }
    }

    pub(crate) fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns every legal move, in row-major order.
    ///
    /// The ordering is part of the contract: minimax breaks ties by
    /// keeping the first optimal move it sees, so enumeration must be
    /// stable. Terminal boards have no legal moves.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row * 3 + col] == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Applies a move for the player to move, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the move lies outside the
    /// grid, and [`MoveError::CellOccupied`] if the target cell already
    /// holds a mark.
    pub fn apply(&self, mv: Move) -> Result<Board, MoveError> {
        if mv.row >= 3 || mv.col >= 3 {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        let index = mv.row * 3 + mv.col;
        if self.cells[index] != Cell::Empty {
            return Err(MoveError::CellOccupied(mv));
        }
        let mut next = *self;
        next.cells[index] = Cell::Occupied(self.to_move());
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(p) => write!(f, "{p}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
