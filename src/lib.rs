//! Noughts - a tic-tac-toe engine with an adversarial search opponent.
//!
//! # Architecture
//!
//! - **Board**: [`Board`] owns the 3x3 grid with read/place/clear
//!   primitives; [`Position`] names the nine cells.
//! - **Rules**: pure functions for win, draw, and terminality checks
//!   ([`check_winner`], [`is_draw`], [`outcome`], [`is_terminal`]).
//! - **Evaluator**: [`evaluate`] scores a terminal or depth-cut board from
//!   one side's perspective.
//! - **Search**: [`Searcher`] runs iterative-deepening alpha-beta over the
//!   live board with mutate-then-undo simulation.
//! - **Controller**: [`GameController`] is the turn state machine; it
//!   invokes the searcher for automated seats and chains automated turns.
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameController, PlayerAssignment, PlayerKind, Position};
//!
//! # fn main() -> Result<(), noughts::MoveError> {
//! let assignment = PlayerAssignment::new(PlayerKind::Human, PlayerKind::Automated);
//! let mut game = GameController::new(assignment, Difficulty::Hard);
//!
//! // Human X opens in the center; the automated O reply is applied
//! // before the receipt is produced.
//! let receipt = game.submit_move(Position::Center)?;
//! # let _ = receipt;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod controller;
mod eval;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - controller
pub use controller::{
    GameController, GamePhase, GameRecord, MoveReceipt, PlayerAssignment, PlayerKind, TurnReport,
};

// Crate-level exports - evaluation
pub use eval::evaluate;

// Crate-level exports - invariants
pub use invariants::{AlternatingTurns, BalancedMarks, Invariant};

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, is_terminal, outcome};

// Crate-level exports - search
pub use search::{Difficulty, SearchConfig, SearchOutcome, Searcher};

// Crate-level exports - core types
pub use position::Position;
pub use types::{Board, Cell, GameOutcome, Player};
