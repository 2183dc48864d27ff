//! Command-line interface for the tictactoe binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(SessionArgs),

    /// Play a fixed list of positions and print the result
    Script {
        #[command(flatten)]
        session: SessionArgs,

        /// Positions to play in order: indices 0-8 or labels like "center"
        #[arg(allow_negative_numbers = true)]
        positions: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(SessionArgs::default())
    }
}

/// Options shared by every command.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionArgs {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first player (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (O)
    #[arg(long)]
    pub player_two: Option<String>,
}
