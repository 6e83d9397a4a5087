//! Turn consistency invariant: the current player matches the board.

use super::Invariant;
use crate::game::Game;
use crate::types::{GameStatus, Player};

/// Invariant: the current player is consistent with the mark counts.
///
/// While the game is in progress, X is to move exactly when the counts
/// are equal. Once the game ends the current player is frozen as the
/// player who made the final move: the winner of a won game, or X for
/// a draw (X always makes the ninth move).
pub struct TurnConsistentInvariant;

impl Invariant<Game> for TurnConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        match game.status() {
            GameStatus::InProgress => match game.current_player() {
                Player::X => x_count == o_count,
                Player::O => x_count == o_count + 1,
            },
            GameStatus::Won(winner) => game.current_player() == winner,
            GameStatus::Draw => game.current_player() == Player::X,
        }
    }

    fn description() -> &'static str {
        "Current player is consistent with mark counts and outcome"
    }
}
