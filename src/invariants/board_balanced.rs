//! Board balance invariant: mark counts reflect alternation.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: X leads O by exactly zero or one mark.
///
/// X moves first and turns alternate strictly, so after any legal
/// sequence of moves the board holds either equal counts of each mark
/// or one extra X. Anything else means a square was set outside the
/// move protocol.
pub struct BoardBalancedInvariant;

impl Invariant<Game> for BoardBalancedInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X leads O by exactly zero or one mark"
    }
}
