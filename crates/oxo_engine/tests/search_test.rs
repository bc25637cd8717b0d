//! End-to-end minimax scenarios.

use oxo_engine::{best_move, Board, Move, Outcome, Player};

fn play(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(Board::new(), |board, &(row, col)| {
        board
            .apply(Move::new(row, col))
            .expect("scripted move should be legal")
    })
}

/// Plays both sides with the engine until the game ends.
fn play_out(mut board: Board) -> Board {
    while let Some(mv) = best_move(&board) {
        board = board.apply(mv).expect("engine move should be legal");
    }
    board
}

#[test]
fn test_best_move_is_deterministic() {
    let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1)]);
    let first = best_move(&board);
    let second = best_move(&board);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_opening_move_is_center_or_corner() {
    let mv = best_move(&Board::new()).expect("empty board has a best move");
    let strong_openings = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(1, 1),
        Move::new(2, 0),
        Move::new(2, 2),
    ];
    assert!(strong_openings.contains(&mv), "weak opening {mv}");
}

#[test]
fn test_perfect_self_play_draws() {
    let board = play_out(Board::new());
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_x_completes_winning_row() {
    // X X . / O O . / . . .  - X to move, (0,2) wins on the spot.
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(board.to_move(), Player::X);
    let mv = best_move(&board).unwrap();
    assert_eq!(mv, Move::new(0, 2));
    let board = board.apply(mv).unwrap();
    assert_eq!(board.outcome(), Outcome::XWins);
}

#[test]
fn test_x_never_loses_the_bottom_row_race() {
    // X O X / X O O / . . .  - X to move; only the bottom row is open.
    // O threatens (2,1) on the middle column, X threatens (2,0) on the
    // left column. Whatever the engine picks must not hand O the game.
    let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2)]);
    assert_eq!(board.to_move(), Player::X);
    let mv = best_move(&board).unwrap();
    assert_eq!(mv.row, 2, "engine must play on the bottom row, got {mv}");
    let finished = play_out(board.apply(mv).unwrap());
    assert_ne!(finished.outcome(), Outcome::OWins);
}

#[test]
fn test_o_holds_the_double_corner_to_a_draw() {
    // X . . / . O . / . . X  - O to move. The double-corner trap is a
    // draw if and only if O keeps finding the right replies.
    let board = play(&[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(board.to_move(), Player::O);
    let finished = play_out(board);
    assert_eq!(finished.outcome(), Outcome::Draw);
}

#[test]
fn test_best_move_none_on_won_board() {
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(board.is_terminal());
    assert_eq!(best_move(&board), None);
}

#[test]
fn test_best_move_none_on_drawn_board() {
    let board = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ]);
    assert_eq!(board.outcome(), Outcome::Draw);
    assert_eq!(best_move(&board), None);
}
