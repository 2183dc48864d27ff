//! Reasons a controller or a round can be rejected.

use super::{Position, Token};

/// Why [`GameController::play_round`](crate::GameController::play_round)
/// left the game untouched.
///
/// A rejected round never changes the board or the winner, so callers that
/// ignore this value see a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectedRound {
    /// A winner has already been decided.
    #[display("Game is already decided")]
    GameDecided,

    /// The index is not one of 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(i64),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for RejectedRound {}

/// Both seats were given the same mark, so turns could not be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Both players hold {}", _0)]
pub struct SharedToken(pub Token);

impl std::error::Error for SharedToken {}
