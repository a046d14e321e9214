//! Failures of game-level operations.

use crate::boardgame::BoardError;
use crate::chess::position::ChessPosition;

/// Errors raised by [`crate::chess::ChessMatch`] and chess notation parsing.
///
/// Board-level failures are carried over unchanged, so a single `?` works on
/// both tiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[allow(missing_docs)]
    #[error(transparent)]
    Board(#[from] BoardError),
    /// Chess notation outside of a1..h8.
    #[error("invalid chess position '{0}': valid values are from a1 to h8")]
    InvalidCoordinate(String),
    /// Move requested from an empty square.
    #[error("there is no piece on source position {0}")]
    NoPieceAtSource(ChessPosition),
    /// The piece on the source square is blocked in every direction.
    #[error("there are no possible moves for the piece on {0}")]
    NoPossibleMoves(ChessPosition),
    /// Target square is not one of the moving piece's legal destinations.
    #[error("the piece on {from} can't move to {to}")]
    IllegalMove {
        #[allow(missing_docs)]
        from: ChessPosition,
        #[allow(missing_docs)]
        to: ChessPosition,
    },
}
