//! Terminal setup, teardown and the interactive event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_core::GameController;
use tracing::{debug, error, info, instrument, warn};

use crate::app::App;
use crate::ui;

/// Runs its cleanup when dropped, on every exit path.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen, logging rather than failing.
fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs an interactive session until the user quits.
///
/// The terminal is restored before returning, also when setup or the loop
/// fails. Returns the controller in its final state.
#[instrument(skip_all)]
pub fn run(app: App) -> Result<GameController> {
    info!("Starting terminal session");

    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, app);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for a key, applies it, until the app asks to quit.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<GameController> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }

        if *app.should_quit() {
            info!(status = %app.game().status(), "Session ended");
            return Ok(app.into_game());
        }
    }
}
