//! Headless play: apply a list of positions and print the outcome.

use anyhow::Result;
use std::io::Write;
use tictactoe_core::{GameController, Position};
use tracing::{info, instrument, warn};

/// Reads a position argument as a raw index, or as a cell label.
///
/// Numbers are passed through unchecked so the controller decides whether
/// they are on the board.
fn parse_position(arg: &str) -> Option<i64> {
    arg.trim().parse::<i64>().ok().or_else(|| {
        Position::from_label_or_number(arg).map(|pos| pos.to_index() as i64)
    })
}

/// Plays each position in order, then prints the board and the status.
///
/// Arguments that are not positions, and rounds the controller rejects,
/// are reported and skipped.
#[instrument(skip(game, out))]
pub fn run_script(game: &mut GameController, positions: &[String], out: &mut impl Write) -> Result<()> {
    for arg in positions {
        let Some(index) = parse_position(arg) else {
            warn!(%arg, "Not a position");
            writeln!(out, "skipping '{}': not a position", arg)?;
            continue;
        };

        let mover = game.current_player().name().to_string();
        match game.play_round(index) {
            Ok(placement) => writeln!(
                out,
                "{} ({}) plays {}",
                mover, placement.token, placement.position
            )?,
            Err(reason) => writeln!(out, "rejected '{}': {}", arg, reason)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", game.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;

    info!(status = %game.status(), "Script finished");
    Ok(())
}
