//! The 3x3 board as a value type.

use super::{Position, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Contents of one cell: empty, or holding a mark.
pub type Cell = Option<Token>;

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`, so every snapshot handed out by the controller is an
/// independent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrites the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// All cells in index order.
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().filter(|c| **c == Some(token)).count()
    }

    /// Checks whether at least one cell is empty.
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Empty positions, in index order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [None; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    None => (pos + 1).to_string(),
                    Some(token) => token.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
