//! Core domain types: players, cells, the board, game outcomes.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
///
/// Seat one owns `X` and moves first; seat two owns `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

/// 3x3 board, cells in row-major order (indices 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks whether the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the cell is not empty; the
    /// board is left unchanged.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(player);
        Ok(())
    }

    /// Clears the cell at `pos` back to empty.
    ///
    /// Must reverse the most recent `place` on that cell; the search relies
    /// on strict place/clear pairing to keep simulation unobservable.
    pub fn clear(&mut self, pos: Position) {
        debug_assert!(!self.is_empty(pos), "clear called on an empty cell");
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// All empty positions, in ascending index order.
    ///
    /// Search tie-breaks depend on this ordering.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a caller can prompt for one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => idx.to_string(),
                    Cell::Occupied(Player::X) => "X".to_string(),
                    Cell::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a game as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game is ongoing.
    InProgress,
    /// The player has completed a line.
    Win(Player),
    /// The board is full with no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for pos in Position::ALL {
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_place_and_clear_round_trip() {
        let before = Board::new();
        let mut board = before.clone();

        board.place(Position::Center, Player::X).expect("empty cell");
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::X));

        board.clear(Position::Center);
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_occupied_cell_rejected() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();

        let snapshot = board.clone();
        let result = board.place(Position::Center, Player::O);

        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_available_moves_ascending_order() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        board.place(Position::TopLeft, Player::O).unwrap();

        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display_shows_marks_and_indices() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::Center, Player::O).unwrap();

        let rendered = board.display();
        assert_eq!(rendered, "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
