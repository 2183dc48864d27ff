//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: key presses in, controller calls out; owns the session's
//!   [`GameController`](tictactoe_core::GameController)
//! - **UI**: stateless ratatui drawing of an [`App`]
//! - **Terminal**: raw-mode setup and the blocking event loop
//! - **Script**: headless play for a fixed list of positions
//! - **Config/CLI/Logging**: settings file, command line and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod input;
pub mod logging;
pub mod script;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode};
pub use cli::{Cli, Command, SessionArgs};
pub use config::{ConfigError, GameConfig};
pub use dialog::{DialogOutcome, NameField, NamesDialog};
