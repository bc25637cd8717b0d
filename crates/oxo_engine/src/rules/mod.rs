//! Game rules: win detection, draw detection, terminal outcomes.

mod draw;
mod win;

use crate::types::{Board, Outcome, Player};

impl Board {
    /// Returns the winning player, if any.
    ///
    /// The scan order is fixed: X's lines are checked before O's, and
    /// for each player rows come before columns before diagonals. Under
    /// alternating legal play at most one player can have a line, so the
    /// order never changes the answer; it exists so that ties on
    /// malformed boards resolve the same way every time.
    pub fn winner(&self) -> Option<Player> {
        win::check_winner(self)
    }

    /// Returns true if the game is over: someone has won or the board
    /// is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || draw::is_full(self)
    }

    /// Returns 1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; on a position still in
    /// progress the 0 says nothing about the eventual result.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Returns the game outcome for this position.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if draw::is_full(self) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}
