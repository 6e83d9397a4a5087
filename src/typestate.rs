//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a [`GameFinished`]
//! ALWAYS has an [`Outcome`], not `Option<Outcome>`, and a finished
//! game has no `make_move` at all.
//!
//! The mutable [`Game`](crate::Game) engine is the primary embedding
//! surface; these types are its compile-time-checked counterpart, and
//! either phase converts into a [`Game`](crate::Game) via `From`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::game::Game;
use crate::phases::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Returns either a new in-progress game or a finished one.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`MoveContract::pre`])
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Rejected when the square is occupied or the move names a player
    /// whose turn it is not. The consumed game is not recoverable on
    /// error by design of the typestate API; use [`Game`](crate::Game)
    /// when retry-on-rejection is needed.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<MoveResult, MoveError> {
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));

        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(MoveResult::Finished(GameFinished {
                board: game.board,
                outcome: Outcome::Winner(winner),
                last_player: action.player,
            }));
        }

        if rules::is_full(&game.board) {
            return Ok(MoveResult::Finished(GameFinished {
                board: game.board,
                outcome: Outcome::Draw,
                last_player: action.player,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, &game) {
            tracing::warn!(error = %violation, "move postcondition failed");
            return Err(violation);
        }
        #[cfg(not(debug_assertions))]
        let _ = before;

        Ok(MoveResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present (not Option).
/// This struct encodes the invariant at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    outcome: Outcome,
    last_player: Player,
}

impl GameFinished {
    /// Returns the outcome.
    ///
    /// Never returns Option - the outcome is guaranteed.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who made the final move.
    ///
    /// For a won game this is the winner.
    pub fn last_player(&self) -> Player {
        self.last_player
    }

    /// Restarts the game (consumes finished, returns a fresh in-progress game).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

// ─────────────────────────────────────────────────────────────
//  Conversions into the mutable engine
// ─────────────────────────────────────────────────────────────

impl From<GameInProgress> for Game {
    fn from(game: GameInProgress) -> Self {
        Game {
            board: game.board,
            current_player: game.to_move,
            status: GameStatus::InProgress,
        }
    }
}

impl From<GameFinished> for Game {
    fn from(game: GameFinished) -> Self {
        let status = match game.outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        };
        Game {
            board: game.board,
            // The acting player stays in place on a terminal move.
            current_player: game.last_player,
            status,
        }
    }
}

impl From<MoveResult> for Game {
    fn from(result: MoveResult) -> Self {
        match result {
            MoveResult::InProgress(game) => game.into(),
            MoveResult::Finished(game) => game.into(),
        }
    }
}
