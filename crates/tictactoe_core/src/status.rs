//! Unified game status, derived from the board and the winner slot.

use super::Player;

/// Where the current round stands.
///
/// This folds [`GameController::winner`](crate::GameController::winner) and
/// [`GameController::is_game_ongoing`](crate::GameController::is_game_ongoing)
/// into one value. It is never stored; every call recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<'a> {
    /// No winner and at least one empty cell.
    InProgress,
    /// The player who completed a line.
    Won(&'a Player),
    /// Board full, no winner.
    Tied,
}

impl<'a> GameStatus<'a> {
    /// Checks whether the round is over, by win or by tie.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<&'a Player> {
        match *self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }
}

impl std::fmt::Display for GameStatus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Tied => write!(f, "Tie"),
        }
    }
}
