//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error returned when a move is rejected.
///
/// Every variant is an expected, recoverable condition: the move is
/// refused, nothing is mutated, and the caller decides what to do next.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the 9-cell board.
    #[display("Index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
