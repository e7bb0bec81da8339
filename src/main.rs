//! Noughts - terminal front-end.
//!
//! All game logic lives in the library; this binary maps flags onto the
//! controller configuration, reads human moves from stdin, and prints
//! board snapshots and outcome text.

#![warn(missing_docs)]

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Difficulty, GameController, GamePhase, MoveReceipt, PlayerAssignment, Position};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            seat_one,
            seat_two,
            json,
        } => run_play(
            difficulty.into(),
            PlayerAssignment::new(seat_one.into(), seat_two.into()),
            json,
        ),
    }
}

/// Drives one game to completion on the terminal.
fn run_play(difficulty: Difficulty, assignment: PlayerAssignment, json: bool) -> Result<()> {
    let mut game = GameController::new(assignment, difficulty);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}\n", game.board().display());

        match game.phase() {
            GamePhase::InProgress => {}
            GamePhase::Won(player) => {
                println!("{player:?} wins!");
                break;
            }
            GamePhase::Draw => {
                println!("Game drawn!");
                break;
            }
            GamePhase::Aborted => {
                println!("Game aborted: the computer found no legal move.");
                break;
            }
        }

        print!("Cell for {:?} (0-8): ", game.active_player());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        // Non-numeric and out-of-range input never reaches the engine;
        // re-prompt without comment.
        let Some(position) = line.trim().parse::<usize>().ok().and_then(Position::from_index)
        else {
            continue;
        };

        match game.submit_move(position) {
            Ok(MoveReceipt::Applied(_)) => {}
            Ok(MoveReceipt::Ignored) => debug!(?position, "submission ignored"),
            Err(error) => println!("{error}"),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game.record())?);
    }

    Ok(())
}
