//! Key to board-cell mapping.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps digits 1-9 to cells, numbered the way the board prints them.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Position::from_index(i64::from(d) - 1),
        _ => None,
    }
}
