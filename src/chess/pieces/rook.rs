//! Rook slides along rows and columns until it hits the edge or another piece.

use crate::boardgame::{Board, Direction, Grid, Piece};
use crate::chess::piece::ChessPiece;
use crate::chess::pieces::{is_free, is_opponent};

pub(in crate::chess) fn possible_moves(rook: &ChessPiece, board: &Board<ChessPiece>) -> Grid<bool> {
    let mut moves = Grid::new(board.rows(), board.columns());
    let Some(origin) = rook.position() else {
        return moves;
    };
    for direction in Direction::ORTHOGONAL {
        let mut target = origin.shift(direction);
        while is_free(board, target) {
            moves[target] = true;
            target = target.shift(direction);
        }
        // The ray stopped at the edge or at a piece: only an opponent's piece
        // can be captured.
        if is_opponent(rook, board, target) {
            moves[target] = true;
        }
    }
    moves
}
