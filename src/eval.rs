//! Position scoring for the search.

use crate::rules;
use crate::types::{Board, GameOutcome, Player};

/// Score of a won game from the winner's perspective.
pub const WIN: i32 = 10_000;

/// Score of a non-terminal position at the depth cutoff.
///
/// Flat and non-positional: short of a forced win or loss within the depth
/// limit, every continuation looks the same to the search.
pub const UNDECIDED: i32 = 1;

/// Scores a board from `perspective`'s point of view.
///
/// Draws score 0, wins for `perspective` score [`WIN`], wins for the
/// opponent score -[`WIN`], and positions still in progress score
/// [`UNDECIDED`].
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    match rules::outcome(board) {
        GameOutcome::Draw => 0,
        GameOutcome::Win(player) if player == perspective => WIN,
        GameOutcome::Win(_) => -WIN,
        GameOutcome::InProgress => UNDECIDED,
    }
}
