//! Turn state machine driving a game.
//!
//! The controller owns the single authoritative board, tracks whose turn
//! it is and how each seat is operated, and invokes the searcher whenever
//! the active seat is automated. Automated turns chain: after any applied
//! move the controller keeps searching and applying until a human seat is
//! active or the game ends, so two automated seats play each other to
//! completion without external input.

use crate::action::{Move, MoveError};
use crate::invariants::{AlternatingTurns, BalancedMarks, Invariant};
use crate::position::Position;
use crate::rules;
use crate::search::{Difficulty, SearchConfig, Searcher};
use crate::types::{Board, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who operates a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied by [`GameController::submit_move`].
    Human,
    /// Moves are chosen by the searcher.
    Automated,
}

/// Seat occupancy for both players.
///
/// Seat one owns [`Player::X`] and moves first; seat two owns
/// [`Player::O`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssignment {
    /// Operator of seat one (X).
    pub seat_one: PlayerKind,
    /// Operator of seat two (O).
    pub seat_two: PlayerKind,
}

impl PlayerAssignment {
    /// Creates an assignment.
    pub fn new(seat_one: PlayerKind, seat_two: PlayerKind) -> Self {
        Self { seat_one, seat_two }
    }

    /// The kind operating `player`'s seat.
    pub fn kind_for(&self, player: Player) -> PlayerKind {
        match player {
            Player::X => self.seat_one,
            Player::O => self.seat_two,
        }
    }
}

/// Phase of the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The game accepts moves.
    InProgress,
    /// The player completed a line; submissions are ignored until reset.
    Won(Player),
    /// The board filled with no winner; submissions are ignored until reset.
    Draw,
    /// An automated turn could not produce a move. The board is left
    /// untouched rather than applying an undefined move.
    Aborted,
}

impl GamePhase {
    /// Whether the game has left the in-progress state.
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Snapshot emitted after every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Board contents after the move and any chained automated turns.
    pub board: Board,
    /// The piece whose turn it now is (the last mover if the game ended).
    pub active_player: Player,
    /// Phase after the move.
    pub phase: GamePhase,
}

/// What became of a submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReceipt {
    /// The move was applied; the report reflects the state after any
    /// chained automated turns.
    Applied(TurnReport),
    /// The submission was ignored: the game is over or the active seat is
    /// not human-operated.
    Ignored,
}

/// Serializable record of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in application order.
    pub history: Vec<Move>,
    /// Final board contents.
    pub board: Board,
    /// Phase at the time the record was taken.
    pub phase: GamePhase,
}

/// The turn state machine.
///
/// Owns the authoritative board; the searcher borrows it mutably during an
/// automated turn and restores it before the turn's single net mutation is
/// applied.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    phase: GamePhase,
    active_player: Player,
    assignment: PlayerAssignment,
    searcher: Searcher,
    history: Vec<Move>,
}

impl GameController {
    /// Starts a new game.
    ///
    /// If seat one is automated its first move is applied before this
    /// returns; if both seats are automated the whole game runs to
    /// completion here.
    #[instrument]
    pub fn new(assignment: PlayerAssignment, difficulty: Difficulty) -> Self {
        let mut controller = Self {
            board: Board::new(),
            phase: GamePhase::InProgress,
            active_player: Player::X,
            assignment,
            searcher: Searcher::new(difficulty.into()),
            history: Vec::new(),
        };
        controller.run_automated_turns();
        controller
    }

    /// Reinitializes the game, re-deriving the search configuration from
    /// the (possibly changed) selections.
    #[instrument(skip(self))]
    pub fn reset(&mut self, assignment: PlayerAssignment, difficulty: Difficulty) {
        *self = Self::new(assignment, difficulty);
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The piece whose turn it is (the last mover once the game is over).
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Seat occupancy in effect.
    pub fn assignment(&self) -> PlayerAssignment {
        self.assignment
    }

    /// The search configuration in effect until the next reset.
    pub fn search_config(&self) -> SearchConfig {
        self.searcher.config()
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Serializable snapshot of the game.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            history: self.history.clone(),
            board: self.board.clone(),
            phase: self.phase,
        }
    }

    /// Submits a human move for the active player.
    ///
    /// Returns [`MoveReceipt::Ignored`] without touching any state when the
    /// game is over or the active seat is not human-operated. An occupied
    /// target cell is an error and also leaves all state unchanged. On
    /// success the move is applied, the outcome recomputed, and any
    /// automated turns run before the receipt is produced.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: Position) -> Result<MoveReceipt, MoveError> {
        if self.phase.is_over() || self.assignment.kind_for(self.active_player) != PlayerKind::Human
        {
            debug!(?position, "submission ignored");
            return Ok(MoveReceipt::Ignored);
        }

        self.apply_move(position)?;
        self.run_automated_turns();

        Ok(MoveReceipt::Applied(self.report()))
    }

    /// Applies one move for the active player and recomputes the outcome.
    fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        self.board.place(position, self.active_player)?;
        self.history.push(Move::new(self.active_player, position));

        match rules::outcome(&self.board) {
            GameOutcome::Win(winner) => {
                info!(?winner, "game won");
                self.phase = GamePhase::Won(winner);
            }
            GameOutcome::Draw => {
                info!("game drawn");
                self.phase = GamePhase::Draw;
            }
            GameOutcome::InProgress => {
                self.active_player = self.active_player.opponent();
            }
        }

        self.assert_invariants();
        Ok(())
    }

    /// Runs automated turns until a human seat is active or the game ends.
    fn run_automated_turns(&mut self) {
        while self.phase == GamePhase::InProgress
            && self.assignment.kind_for(self.active_player) == PlayerKind::Automated
        {
            let piece = self.active_player;
            match self.searcher.choose_move(&mut self.board, piece) {
                Some(position) => {
                    debug!(?piece, ?position, "automated move");
                    self.apply_move(position)
                        .expect("search chose an empty cell");
                }
                None => {
                    warn!(?piece, "no legal move for automated turn, aborting game");
                    self.phase = GamePhase::Aborted;
                }
            }
        }
    }

    fn report(&self) -> TurnReport {
        TurnReport {
            board: self.board.clone(),
            active_player: self.active_player,
            phase: self.phase,
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            AlternatingTurns::holds(self),
            "invariant violated: {}",
            AlternatingTurns::description()
        );
        debug_assert!(
            BalancedMarks::holds(self),
            "invariant violated: {}",
            BalancedMarks::description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_vs_human() -> GameController {
        GameController::new(
            PlayerAssignment::new(PlayerKind::Human, PlayerKind::Human),
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let controller = human_vs_human();
        assert_eq!(controller.phase(), GamePhase::InProgress);
        assert_eq!(controller.active_player(), Player::X);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_players_alternate() {
        let mut controller = human_vs_human();
        controller.submit_move(Position::Center).unwrap();
        assert_eq!(controller.active_player(), Player::O);
        controller.submit_move(Position::TopLeft).unwrap();
        assert_eq!(controller.active_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut controller = human_vs_human();
        controller.submit_move(Position::Center).unwrap();

        let board_before = controller.board().clone();
        let result = controller.submit_move(Position::Center);

        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(controller.board(), &board_before);
        assert_eq!(controller.active_player(), Player::O);
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut controller = human_vs_human();
        for pos in [
            Position::TopLeft,    // X
            Position::MiddleLeft, // O
            Position::TopCenter,  // X
            Position::Center,     // O
            Position::TopRight,   // X wins top row
        ] {
            controller.submit_move(pos).unwrap();
        }

        assert_eq!(controller.phase(), GamePhase::Won(Player::X));
    }

    #[test]
    fn test_submissions_ignored_after_game_over() {
        let mut controller = human_vs_human();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            controller.submit_move(pos).unwrap();
        }

        let board_before = controller.board().clone();
        let receipt = controller.submit_move(Position::BottomRight).unwrap();

        assert_eq!(receipt, MoveReceipt::Ignored);
        assert_eq!(controller.board(), &board_before);
        assert_eq!(controller.history().len(), 5);
    }

    #[test]
    fn test_automated_reply_chains_after_human_move() {
        let mut controller = GameController::new(
            PlayerAssignment::new(PlayerKind::Human, PlayerKind::Automated),
            Difficulty::Hard,
        );

        let receipt = controller.submit_move(Position::Center).unwrap();

        // The automated O reply was applied before the receipt was taken.
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.active_player(), Player::X);
        match receipt {
            MoveReceipt::Applied(report) => {
                assert_eq!(report.active_player, Player::X);
                assert_eq!(report.phase, GamePhase::InProgress);
            }
            MoveReceipt::Ignored => panic!("move should have been applied"),
        }
    }

    #[test]
    fn test_automated_first_seat_moves_immediately() {
        let controller = GameController::new(
            PlayerAssignment::new(PlayerKind::Automated, PlayerKind::Human),
            Difficulty::Easy,
        );

        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history()[0].player, Player::X);
        assert_eq!(controller.active_player(), Player::O);
    }

    #[test]
    fn test_both_automated_at_full_depth_draw() {
        let controller = GameController::new(
            PlayerAssignment::new(PlayerKind::Automated, PlayerKind::Automated),
            Difficulty::Hard,
        );

        assert_eq!(controller.phase(), GamePhase::Draw);
        assert_eq!(controller.history().len(), 9);
    }

    #[test]
    fn test_both_automated_shallow_terminates() {
        let controller = GameController::new(
            PlayerAssignment::new(PlayerKind::Automated, PlayerKind::Automated),
            Difficulty::Easy,
        );

        assert!(controller.phase().is_over());
        assert!(controller.history().len() <= 9);
    }

    #[test]
    fn test_reset_rederives_config_and_clears_state() {
        let mut controller = human_vs_human();
        controller.submit_move(Position::Center).unwrap();
        assert_eq!(controller.search_config().max_depth(), 2);

        controller.reset(
            PlayerAssignment::new(PlayerKind::Human, PlayerKind::Human),
            Difficulty::Hard,
        );

        assert_eq!(controller.search_config().max_depth(), 9);
        assert_eq!(controller.phase(), GamePhase::InProgress);
        assert_eq!(controller.active_player(), Player::X);
        assert!(controller.history().is_empty());
        assert_eq!(controller.board(), &Board::new());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut controller = human_vs_human();
        controller.submit_move(Position::Center).unwrap();

        let json = serde_json::to_string(&controller.record()).unwrap();
        let decoded: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, controller.record());
    }
}
