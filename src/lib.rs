//! Pure tic-tac-toe game logic.
//!
//! This crate implements the complete state machine for a standard game of
//! tic-tac-toe on a 3×3 grid: move validation, turn alternation, and win/draw
//! determination. It defines no I/O, no rendering, and no concurrency — a
//! presentation layer (TUI, web, whatever) embeds a [`Game`] and drives it
//! through its public contract.
//!
//! # Architecture
//!
//! - **Types**: closed enumerations for [`Player`], [`Square`], and
//!   [`GameStatus`] — no stringly-typed cells
//! - **Rules**: pure, side-effect-free outcome evaluation in [`rules`]
//! - **Engine**: [`Game`], the mutable state machine with `make_move`,
//!   `reset`, and read-only accessors
//! - **Typestate**: [`GameInProgress`] / [`GameFinished`] phase types where a
//!   finished game always carries an [`Outcome`]
//! - **Invariants & contracts**: first-class correctness properties checked
//!   as debug-build postconditions
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::X);
//!
//! game.make_move(0)?; // X takes the top-left corner
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod phases;
mod position;
mod types;
mod typestate;

// Public sub-APIs
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - core types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - positions and actions
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - mutable engine
pub use game::Game;

// Crate-level exports - typestate phases
pub use phases::Outcome;
pub use typestate::{GameFinished, GameInProgress, MoveResult};
