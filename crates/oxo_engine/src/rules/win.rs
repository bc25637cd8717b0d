//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;

/// The eight winning lines, as row-major cell indices.
///
/// Rows first, then columns, then the main diagonal `(i, i)` and the
/// anti-diagonal `(i, 2 - i)`.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Scans players in declaration order (X before O) and lines in the
/// `LINES` order, returning the first player with three in a row.
pub(crate) fn check_winner(board: &Board) -> Option<Player> {
    for player in Player::iter() {
        let mark = Cell::Occupied(player);
        for line in LINES {
            if line.iter().all(|&i| board.cell(i) == mark) {
                return Some(player);
            }
        }
    }
    None
}
