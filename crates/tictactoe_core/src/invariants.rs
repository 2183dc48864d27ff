//! Invariants of the game controller.
//!
//! Each invariant is a logical property that holds after every accepted
//! round. They are asserted in debug builds and can be checked directly.

use super::controller::GameController;
use super::rules;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The first seat has as many marks as the second, or exactly one more.
pub struct TokenBalanceInvariant;

impl Invariant<GameController> for TokenBalanceInvariant {
    fn holds(game: &GameController) -> bool {
        let board = game.board();
        let (first, second) = game.players();
        let first_count = board.count(first.token());
        let second_count = board.count(second.token());
        let valid = first_count == second_count || first_count == second_count + 1;
        if !valid {
            warn!(
                first = %first.token(),
                first_count,
                second_count,
                "Token balance violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "First seat's mark count must equal the second seat's or exceed it by one"
    }
}

/// A recorded winner owns a complete line, and a complete line means a
/// recorded winner.
pub struct WinnerConsistentInvariant;

impl Invariant<GameController> for WinnerConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let on_board = rules::check_winner(&game.board());
        let recorded = game.winner().map(|player| player.token());
        let valid = match recorded {
            Some(token) => rules::has_won(&game.board(), token),
            None => on_board.is_none(),
        };
        if !valid {
            warn!(?on_board, ?recorded, "Winner consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Winner must match the completed line on the board"
    }
}

/// At most one mark holds a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<GameController> for SingleWinnerInvariant {
    fn holds(game: &GameController) -> bool {
        let board = game.board();
        let (first, second) = game.players();
        let valid = !(rules::has_won(&board, first.token()) && rules::has_won(&board, second.token()));
        if !valid {
            warn!("Both marks hold a line");
        }
        valid
    }

    fn description() -> &'static str {
        "Only one mark may hold a complete line"
    }
}

/// All controller invariants as a composable set.
pub type ControllerInvariants = (
    TokenBalanceInvariant,
    WinnerConsistentInvariant,
    SingleWinnerInvariant,
);

/// Asserts that every controller invariant holds (debug builds only).
pub fn assert_invariants(game: &GameController) {
    debug_assert!(
        ControllerInvariants::check_all(game).is_ok(),
        "Controller invariant violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Token};

    #[test]
    fn test_invariants_hold_for_new_game() {
        let game = GameController::default();
        assert!(ControllerInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_rounds() {
        let mut game = GameController::default();
        for pos in [4, 0, 8, 2, 1, 7] {
            game.play_round(pos).unwrap();
            assert!(ControllerInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_balance_follows_seats_not_marks() {
        let mut game = GameController::new(
            Player::new("Alice", Token::O),
            Player::new("Bob", Token::X),
        )
        .unwrap();
        for pos in [4, 0, 8] {
            game.play_round(pos).unwrap();
            assert!(ControllerInvariants::check_all(&game).is_ok());
        }

        // X is the second seat here, so X leading by one is out of turn.
        game.board.clear();
        game.board.set(Position::TopLeft, Some(Token::X));
        let violations = ControllerInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(TokenBalanceInvariant::description())]
        );
    }

    #[test]
    fn test_detects_unbalanced_board() {
        let mut game = GameController::default();
        game.play_round(4).unwrap();
        game.board.set(Position::TopLeft, Some(Token::X));

        let violations = ControllerInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            TokenBalanceInvariant::description()
        );
    }

    #[test]
    fn test_detects_unrecorded_line() {
        let mut game = GameController::default();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            game.board.set(pos, Some(Token::X));
        }
        for pos in [Position::MiddleLeft, Position::Center] {
            game.board.set(pos, Some(Token::O));
        }

        let violations = ControllerInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                WinnerConsistentInvariant::description()
            )]
        );
    }
}
