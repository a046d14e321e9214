//! King moves one square in any direction.

use crate::boardgame::{Board, Direction, Grid, Piece};
use crate::chess::piece::ChessPiece;
use crate::chess::pieces::{is_free, is_opponent};

pub(in crate::chess) fn possible_moves(king: &ChessPiece, board: &Board<ChessPiece>) -> Grid<bool> {
    let mut moves = Grid::new(board.rows(), board.columns());
    let Some(origin) = king.position() else {
        return moves;
    };
    for direction in Direction::ALL {
        let target = origin.shift(direction);
        if is_free(board, target) || is_opponent(king, board, target) {
            moves[target] = true;
        }
    }
    moves
}
