//! Movement rules, one module per [`crate::chess::PieceKind`].

pub(super) mod king;
pub(super) mod rook;

use crate::boardgame::{Board, Position};
use crate::chess::piece::ChessPiece;

/// Empty cell on the board.
fn is_free(board: &Board<ChessPiece>, position: Position) -> bool {
    matches!(board.piece_at(position), Ok(None))
}

/// Cell on the board holding a piece `piece` can capture.
fn is_opponent(piece: &ChessPiece, board: &Board<ChessPiece>, position: Position) -> bool {
    matches!(board.piece_at(position), Ok(Some(other)) if piece.is_opponent(other))
}
