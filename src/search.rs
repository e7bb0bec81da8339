//! Iterative-deepening alpha-beta search.
//!
//! The searcher simulates candidate moves directly on the live board,
//! undoing each application before trying the next, so a search call makes
//! no net mutation. One full alpha-beta pass runs per depth limit from 1 up
//! to the configured maximum; the move kept is the one chosen by the
//! deepest pass that completed, so a shallow result survives even when a
//! deeper pass fails.

use crate::eval;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier for the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Two-ply look-ahead.
    Easy,
    /// Three-ply look-ahead.
    Medium,
    /// Full-board look-ahead; plays perfectly.
    Hard,
}

impl Difficulty {
    /// Look-ahead depth for this tier.
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 9,
        }
    }
}

/// Search depth limit, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    max_depth: u8,
}

impl SearchConfig {
    /// Creates a config with the given depth limit, clamped to at least 1.
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// The maximum iterative-deepening depth.
    pub fn max_depth(self) -> u8 {
        self.max_depth
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty.max_depth())
    }
}

/// Result of a single fixed-depth pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The pass completed and chose a root move.
    Success(Position),
    /// The pass found no root move. Only possible when the board was
    /// already terminal at the root.
    Failure,
}

/// Alpha-beta move chooser for one side.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active search configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Picks a move for `piece` on `board`.
    ///
    /// The board is mutated during simulation and restored before each
    /// return path; the caller must not read it while the call is in
    /// flight. Returns `None` only if the depth-1 pass fails, which means
    /// the board was already terminal when the search was invoked.
    #[instrument(skip(self, board))]
    pub fn choose_move(&self, board: &mut Board, piece: Player) -> Option<Position> {
        let mut best = None;

        for depth_limit in 1..=self.config.max_depth() {
            match self.run_pass(board, piece, depth_limit) {
                SearchOutcome::Success(position) => {
                    debug!(depth_limit, ?position, "pass completed");
                    best = Some(position);
                }
                SearchOutcome::Failure => {
                    debug!(depth_limit, "pass failed, keeping shallower result");
                    break;
                }
            }
        }

        best
    }

    /// Runs one full alpha-beta pass with a fixed depth limit.
    fn run_pass(&self, board: &mut Board, piece: Player, depth_limit: u8) -> SearchOutcome {
        let mut pass = DepthPass {
            perspective: piece,
            depth_limit,
            best_root: None,
        };
        pass.alpha_beta(board, i32::MIN, i32::MAX, 0, true);

        match pass.best_root {
            Some(position) => SearchOutcome::Success(position),
            None => SearchOutcome::Failure,
        }
    }
}

/// State for one fixed-depth alpha-beta pass.
///
/// The perspective piece is fixed when the pass starts and used for every
/// evaluation in it, at maximizing and minimizing plies alike.
struct DepthPass {
    perspective: Player,
    depth_limit: u8,
    best_root: Option<Position>,
}

impl DepthPass {
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        if rules::is_terminal(board) || depth >= self.depth_limit {
            return eval::evaluate(board, self.perspective);
        }

        let piece = if maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        };

        for position in board.available_moves() {
            board
                .place(position, piece)
                .expect("available move targets an empty cell");
            let value = self.alpha_beta(board, alpha, beta, depth + 1, !maximizing);
            // Restore before the cutoff check so pruning never leaves a
            // simulated mark behind.
            board.clear(position);

            if maximizing && value > alpha {
                alpha = value;
                // Strict inequality: the first root move reaching a given
                // score wins ties.
                if depth == 0 {
                    self.best_root = Some(position);
                }
            }
            if !maximizing && value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }

        if maximizing { alpha } else { beta }
    }
}
