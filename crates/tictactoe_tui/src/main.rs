//! tictactoe - two-player tic-tac-toe in the terminal.
//!
//! This is the composition root: it builds the players, the controller and
//! the front end, and wires them together.

use anyhow::Result;
use clap::Parser;
use tictactoe_core::{GameController, Player, Token};
use tictactoe_tui::{App, Cli, Command, GameConfig, SessionArgs, logging, script, terminal};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(session) => run_play(session),
        Command::Script { session, positions } => run_script(session, positions),
    }
}

/// Resolves settings for a session: file first, then command-line names.
fn load_config(session: SessionArgs) -> Result<GameConfig> {
    let config = GameConfig::load(session.config.as_deref())?;
    Ok(config.with_names(session.player_one, session.player_two))
}

/// Builds the controller with its two seats.
#[instrument(skip(config))]
fn build_game(config: &GameConfig) -> Result<GameController> {
    let game = GameController::new(
        Player::new(config.player_one(), Token::X),
        Player::new(config.player_two(), Token::O),
    )?;
    Ok(game)
}

/// Run the interactive terminal game
fn run_play(session: SessionArgs) -> Result<()> {
    let config = load_config(session)?;
    logging::init_file_logging(config.log_file(), config.log_filter())?;

    info!("Starting tictactoe");

    let app = App::new(build_game(&config)?, *config.ask_names());
    let game = terminal::run(app)?;

    info!(status = %game.status(), "Goodbye");
    Ok(())
}

/// Run a fixed list of positions and print the result
fn run_script(session: SessionArgs, positions: Vec<String>) -> Result<()> {
    let config = load_config(session)?;
    logging::init_stderr_logging(config.log_filter());

    let mut game = build_game(&config)?;
    let mut stdout = std::io::stdout().lock();
    script::run_script(&mut game, &positions, &mut stdout)
}
