//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be composed into contract and invariant checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Evaluates the outcome of a board.
///
/// Checks the 8 canonical lines in a fixed order (rows top-to-bottom,
/// columns left-to-right, then both diagonals) and returns the first
/// completed line's owner as [`GameStatus::Won`]. A full board with no
/// completed line is a legitimate [`GameStatus::Draw`]; otherwise the
/// game is still [`GameStatus::InProgress`].
///
/// Pure and idempotent: the board is never mutated and repeated calls
/// on the same board yield the same answer.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};
    use crate::Position;

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_completed_row_wins() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X O / O X O - no three in a row for either mark
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.iter().zip(marks) {
            board.set(*pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let before = board.clone();

        let first = evaluate(&board);
        let second = evaluate(&board);

        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
