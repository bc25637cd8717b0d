//! Exhaustive minimax search for optimal play.
//!
//! The full game tree from any reachable 3x3 position is small (at most
//! 9! leaves, far fewer in practice), so the search visits every node:
//! no pruning, no depth limit, no caching.

use crate::types::{Board, Player};
use crate::Move;
use tracing::{debug, instrument};

/// Returns the optimal move for the player to move, or `None` if the
/// board is already terminal.
///
/// X maximizes [`Board::utility`], O minimizes it. Among equally
/// optimal moves the first in row-major order wins, so repeated calls
/// on the same board always return the same move.
#[instrument(skip(board), fields(to_move = %board.to_move()))]
pub fn best_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }
    let (score, mv) = match board.to_move() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    debug!(?mv, score, "search complete");
    mv
}

/// Best score X can force from here, with the move achieving it.
///
/// Terminal positions score themselves and carry no move. The running
/// best starts below -1, the lowest utility, so the first candidate
/// always replaces it; only strictly better scores replace it after
/// that, which keeps the earliest optimal move.
fn max_value(board: &Board) -> (i32, Option<Move>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }
    let mut best_score = -2;
    let mut best_move = None;
    for mv in board.legal_moves() {
        let child = board.apply(mv).expect("legal move targets an empty cell");
        let (score, _) = min_value(&child);
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }
    (best_score, best_move)
}

/// Best score O can force from here, with the move achieving it.
///
/// Mirror of [`max_value`]: starts above +1 and keeps strictly smaller
/// scores.
fn min_value(board: &Board) -> (i32, Option<Move>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }
    let mut best_score = 2;
    let mut best_move = None;
    for mv in board.legal_moves() {
        let child = board.apply(mv).expect("legal move targets an empty cell");
        let (score, _) = max_value(&child);
        if score < best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }
    (best_score, best_move)
}
