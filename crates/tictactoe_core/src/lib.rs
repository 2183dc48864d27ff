//! Two-player tic-tac-toe game logic.
//!
//! The crate is the whole rule set of the game, with no presentation:
//!
//! - [`Player`]: a renameable display name bound to a fixed [`Token`]
//! - [`Board`]: nine cells in row-major order, handed out as owned snapshots
//! - [`GameController`]: turn derivation, win/tie detection and reset
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, GameStatus, Player, Token};
//!
//! let mut game = GameController::new(
//!     Player::new("Alice", Token::X),
//!     Player::new("Bob", Token::O),
//! )
//! .unwrap();
//!
//! for pos in [0, 3, 1, 4, 2] {
//!     game.play_round(pos).unwrap();
//! }
//!
//! assert_eq!(game.winner().map(|p| p.name()), Some("Alice"));
//! assert!(matches!(game.status(), GameStatus::Won(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod status;
mod token;

pub use board::{Board, Cell};
pub use controller::{GameController, Placement};
pub use error::{RejectedRound, SharedToken};
pub use player::Player;
pub use position::Position;
pub use status::GameStatus;
pub use token::Token;
