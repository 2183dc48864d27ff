//! Application state: the render layer's view of one game session.
//!
//! [`App`] turns key presses into controller calls and keeps just enough
//! presentation state (cursor, open dialog, last notice) to draw a frame.
//! Everything about the game itself is read back from the controller.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tictactoe_core::{GameController, GameStatus, Position};
use tracing::{debug, info, instrument};

use crate::dialog::{DialogOutcome, NamesDialog};
use crate::input::{digit_position, move_cursor};

/// What the session is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The board accepts moves.
    Playing,
    /// The names dialog is open on top of the board.
    EditingNames(NamesDialog),
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    cursor: Position,
    mode: Mode,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Wraps a controller, optionally opening the names dialog first.
    #[instrument(skip(game))]
    pub fn new(game: GameController, ask_names: bool) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            mode: Mode::Playing,
            notice: None,
            should_quit: false,
        };
        if ask_names {
            app.open_names_dialog();
        }
        app
    }

    /// Gives the controller back, e.g. when the session ends.
    pub fn into_game(self) -> GameController {
        self.game
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.mode {
            Mode::EditingNames(dialog) => match dialog.handle_key(key) {
                DialogOutcome::Editing => {}
                DialogOutcome::Submitted(one, two) => {
                    self.game.set_players_names(&one, &two);
                    self.mode = Mode::Playing;
                    self.notice = Some("Names updated".to_string());
                }
                DialogOutcome::Cancelled => {
                    self.mode = Mode::Playing;
                }
            },
            Mode::Playing => self.handle_playing_key(key.code),
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.reset_game();
                self.cursor = Position::Center;
                self.notice = Some("New round".to_string());
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.open_names_dialog(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn open_names_dialog(&mut self) {
        let (one, two) = self.game.players();
        self.mode = Mode::EditingNames(NamesDialog::new(one.name(), two.name()));
    }

    /// Plays the current player's mark at `pos`, reporting a rejection as a notice.
    fn play(&mut self, pos: Position) {
        let mover = self.game.current_player().name().to_string();
        match self.game.play_at(pos) {
            Ok(placement) => {
                debug!(?placement, "Round accepted");
                self.notice = Some(format!("{} played {}", mover, placement.position));
            }
            Err(reason) => {
                self.notice = Some(reason.to_string());
            }
        }
    }

    /// Cells that can still be played, empty while the game is decided.
    pub fn playable(&self) -> Vec<Position> {
        match self.game.status() {
            GameStatus::InProgress => self.game.board().empty_positions(),
            GameStatus::Won(_) | GameStatus::Tied => Vec::new(),
        }
    }

    /// One-line summary of the game for the status bar.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => {
                let player = self.game.current_player();
                format!("{}'s turn ({})", player.name(), player.token())
            }
            GameStatus::Won(player) => format!(
                "{} wins! Press 'r' for a new round or 'q' to quit.",
                player.name()
            ),
            GameStatus::Tied => "It's a tie! Press 'r' for a new round or 'q' to quit.".to_string(),
        }
    }
}
