//! Failures of board-level operations.

use crate::boardgame::position::Position;

/// Errors raised by [`crate::boardgame::Board`]. Game-level errors refine
/// these, see [`crate::chess::ChessError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board must have at least one row and one column, and every cell
    /// must be addressable by a [`Position`].
    #[error(
        "there must be at least 1 row and 1 column and every cell must be addressable, got \
         {rows}x{columns}"
    )]
    InvalidDimensions {
        #[allow(missing_docs)]
        rows: usize,
        #[allow(missing_docs)]
        columns: usize,
    },
    /// Queried, placed or removed position lies outside of the board.
    #[error("position {0} is not on the board")]
    OutOfBounds(Position),
    /// Placement on a cell which already holds a piece.
    #[error("there is already a piece on position {0}")]
    CellOccupied(Position),
}
