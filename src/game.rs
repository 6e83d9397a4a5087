//! Mutable game engine for tic-tac-toe.
//!
//! [`Game`] is the canonical state machine: it owns the board, the current
//! player, and the status, and is mutated only through [`Game::make_move`]
//! (or its typed twin [`Game::place`]) and [`Game::reset`]. Constructed
//! explicitly and owned by whichever session needs it - no ambient global.

use crate::action::MoveError;
use crate::contracts;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// State machine: `InProgress` is initial; `Won(_)` and `Draw` are
/// terminal. Terminal states accept no moves; only [`Game::reset`]
/// leaves them, returning unconditionally to the initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    ///
    /// After a terminal move this is the player who just moved
    /// (the winner, for a won game).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions still open for play.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Makes a move at the given board index (0-8) for the current player.
    ///
    /// On success the mark is placed, the outcome is evaluated, and the
    /// resulting status is returned. The current player advances only if
    /// the game continues; the move that ends the game leaves the acting
    /// player in place.
    ///
    /// # Errors
    ///
    /// Rejected with no mutation when the index is out of bounds, the
    /// square is occupied, or the game is already over. These are
    /// expected caller-facing conditions, never panics.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Makes a move at the given position for the current player.
    ///
    /// Same semantics as [`Game::make_move`], minus the bounds check -
    /// a [`Position`] is in bounds by construction.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            debug!("rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_player));
        self.status = rules::evaluate(&self.board);

        // The winner is the player who just moved; only advance the
        // turn while the game continues.
        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        contracts::assert_invariants(self);

        Ok(self.status)
    }

    /// Resets the game to the initial state.
    ///
    /// Unconditional: works from any state, never fails.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
