//! Status consistency invariant: status matches the board outcome.

use super::Invariant;
use crate::game::Game;
use crate::rules;

/// Invariant: the stored status equals the evaluated board outcome.
///
/// The engine re-evaluates the outcome after every accepted move, so a
/// mismatch means the board changed without going through the move
/// protocol, or the status was set by hand.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Stored status matches the evaluated board outcome"
    }
}
