//! Structural invariants over controller state.
//!
//! Violations are programming errors, not recoverable runtime conditions;
//! the controller checks these with `debug_assert!` after every applied
//! move.

use crate::controller::GameController;
use crate::types::{Cell, Player};

/// A structural property every reachable controller state satisfies.
pub trait Invariant {
    /// Whether the invariant holds for the given state.
    fn holds(controller: &GameController) -> bool;

    /// Description used in assertion messages.
    fn description() -> &'static str;
}

/// Players alternate turns, X first.
pub struct AlternatingTurns;

impl Invariant for AlternatingTurns {
    fn holds(controller: &GameController) -> bool {
        let history = controller.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // The active player only advances while the game is running; once
        // over it stays on the last mover.
        if !controller.phase().is_over() {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            if controller.active_player() != expected {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "players alternate turns (X, O, X, O, ...)"
    }
}

/// Mark counts stay balanced: X has placed either as many marks as O or
/// exactly one more.
pub struct BalancedMarks;

impl Invariant for BalancedMarks {
    fn holds(controller: &GameController) -> bool {
        let mut xs = 0usize;
        let mut os = 0usize;
        for cell in controller.board().cells() {
            match cell {
                Cell::Occupied(Player::X) => xs += 1,
                Cell::Occupied(Player::O) => os += 1,
                Cell::Empty => {}
            }
        }
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one, X never behind"
    }
}
