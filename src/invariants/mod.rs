//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod board_balanced;
pub mod status_consistent;
pub mod turn_consistent;

pub use board_balanced::BoardBalancedInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    BoardBalancedInvariant,
    TurnConsistentInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Player, Square};
    use crate::{Game, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        game.place(Position::Center).unwrap();
        game.place(Position::TopRight).unwrap();

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();

        // Corrupt the board: O plays twice without X moving.
        game.board.set(Position::TopLeft, Square::Occupied(Player::O));
        game.board.set(Position::TopRight, Square::Occupied(Player::O));

        let result = GameInvariants::check_all(&game);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_invariant_set_detects_stale_status() {
        let mut game = Game::new();
        // X completes the top row behind the engine's back.
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            game.board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(game.status(), GameStatus::InProgress);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("status"))
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (BoardBalancedInvariant, TurnConsistentInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
