//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full with no line of three
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.iter().zip(marks) {
            board.set(*pos, Square::Occupied(player));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
