//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::{Difficulty, PlayerKind};

/// Noughts - tic-tac-toe with an alpha-beta computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an alpha-beta computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Computer look-ahead tier
        #[arg(short, long, value_enum, default_value = "easy")]
        difficulty: DifficultyArg,

        /// Who operates seat one (X, moves first)
        #[arg(long, value_enum, default_value = "human")]
        seat_one: SeatArg,

        /// Who operates seat two (O)
        #[arg(long, value_enum, default_value = "computer")]
        seat_two: SeatArg,

        /// Print the finished game as a JSON record
        #[arg(long)]
        json: bool,
    },
}

/// Difficulty flag values.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DifficultyArg {
    /// Two-ply look-ahead
    Easy,
    /// Three-ply look-ahead
    Medium,
    /// Full-depth look-ahead
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Seat occupancy flag values.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SeatArg {
    /// Moves come from the terminal
    Human,
    /// Moves come from the search engine
    Computer,
}

impl From<SeatArg> for PlayerKind {
    fn from(arg: SeatArg) -> Self {
        match arg {
            SeatArg::Human => PlayerKind::Human,
            SeatArg::Computer => PlayerKind::Automated,
        }
    }
}
