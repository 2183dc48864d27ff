//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Token};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by `token`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, token: Token) -> Option<[Position; 3]> {
    WIN_LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == Some(token)))
}

/// Checks whether `token` holds a complete line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, token: Token) -> bool {
    winning_line(board, token).is_some()
}

/// Returns the mark holding a complete line, checking `X` first.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Token> {
    [Token::X, Token::O]
        .into_iter()
        .find(|token| has_won(board, *token))
}
