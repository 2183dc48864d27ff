//! The two marks written into board cells.

use serde::{Deserialize, Serialize};

/// A mark placed on the board.
///
/// Each seat holds one of the two, and the default seating gives `X` to
/// the first seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Token {
    /// The cross.
    #[display("X")]
    X,
    /// The nought.
    #[display("O")]
    O,
}
