//! Chess pieces and their movement rules.

use std::fmt::{self, Write};

use crate::boardgame::{Board, Grid, Piece, Position};
use crate::chess::color::Color;
use crate::chess::pieces::{king, rook};

/// Kinds of pieces the game knows how to move.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Rook,
}

impl PieceKind {
    /// Display glyph of the kind, regardless of color.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::King => 'K',
            Self::Rook => 'R',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.glyph())
    }
}

/// A piece owned by one of the players. Its recorded position is managed by
/// the [`Board`] holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessPiece {
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
}

impl ChessPiece {
    /// Creates a piece which is not on any board yet.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            position: None,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn king(color: Color) -> Self {
        Self::new(PieceKind::King, color)
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn rook(color: Color) -> Self {
        Self::new(PieceKind::Rook, color)
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Position-independent descriptor used for rendering.
    #[must_use]
    pub const fn view(&self) -> PieceView {
        PieceView {
            kind: self.kind,
            color: self.color,
        }
    }

    /// Returns true iff `other` belongs to the opponent.
    #[must_use]
    pub fn is_opponent(&self, other: &Self) -> bool {
        other.color == self.color.opponent()
    }
}

impl Piece for ChessPiece {
    fn position(&self) -> Option<Position> {
        self.position
    }

    fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    fn possible_moves(&self, board: &Board<Self>) -> Grid<bool> {
        match self.kind {
            PieceKind::King => king::possible_moves(self, board),
            PieceKind::Rook => rook::possible_moves(self, board),
        }
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

/// What a square shows: the kind of the piece and its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceView {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub color: Color,
}

impl fmt::Display for PieceView {
    /// White pieces are uppercase glyphs, black pieces lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self.color {
            Color::White => self.kind.glyph(),
            Color::Black => self.kind.glyph().to_ascii_lowercase(),
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(PieceKind::King.to_string(), "K");
        assert_eq!(PieceKind::Rook.to_string(), "R");
        assert_eq!(ChessPiece::king(Color::White).to_string(), "K");
        assert_eq!(ChessPiece::rook(Color::White).to_string(), "R");
        assert_eq!(ChessPiece::king(Color::Black).to_string(), "k");
        assert_eq!(ChessPiece::rook(Color::Black).to_string(), "r");
    }

    #[test]
    fn new_piece_is_off_board() {
        let piece = ChessPiece::rook(Color::Black);
        assert_eq!(piece.position(), None);
        assert_eq!(piece.kind(), PieceKind::Rook);
        assert_eq!(piece.color(), Color::Black);
    }

    #[test]
    fn opponents() {
        let white = ChessPiece::king(Color::White);
        assert!(white.is_opponent(&ChessPiece::rook(Color::Black)));
        assert!(!white.is_opponent(&ChessPiece::rook(Color::White)));
    }

    #[test]
    fn unplaced_piece_has_no_moves() {
        let board = Board::<ChessPiece>::new(8, 8).unwrap();
        for piece in [ChessPiece::king(Color::White), ChessPiece::rook(Color::Black)] {
            let moves = piece.possible_moves(&board);
            assert_eq!((moves.rows(), moves.columns()), (8, 8));
            assert!(!piece.has_any_possible_move(&board));
        }
    }
}
