//! Outcome type for finished games.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
