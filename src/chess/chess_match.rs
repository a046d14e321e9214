//! A match owns the board, sets up the pieces and executes moves.

use crate::boardgame::{Board, Grid, Piece};
use crate::chess::color::Color;
use crate::chess::error::ChessError;
use crate::chess::piece::{ChessPiece, PieceKind, PieceView};
use crate::chess::position::{ChessPosition, BOARD_WIDTH};

/// Pieces placed when a match starts: only Rooks and Kings.
const INITIAL_SETUP: [(char, u8, PieceKind, Color); 12] = [
    ('c', 1, PieceKind::Rook, Color::White),
    ('c', 2, PieceKind::Rook, Color::White),
    ('d', 2, PieceKind::Rook, Color::White),
    ('e', 2, PieceKind::Rook, Color::White),
    ('e', 1, PieceKind::Rook, Color::White),
    ('d', 1, PieceKind::King, Color::White),
    ('c', 7, PieceKind::Rook, Color::Black),
    ('c', 8, PieceKind::Rook, Color::Black),
    ('d', 7, PieceKind::Rook, Color::Black),
    ('e', 7, PieceKind::Rook, Color::Black),
    ('e', 8, PieceKind::Rook, Color::Black),
    ('d', 8, PieceKind::King, Color::Black),
];

/// Decides which moves [`ChessMatch::perform_move`] accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovePolicy {
    /// Any move from an occupied square to any square on the board, capturing
    /// whatever stands there (including own pieces).
    #[default]
    Permissive,
    /// Only moves to one of the moving piece's legal destinations.
    Strict,
}

/// A single game on a standard 8x8 board.
///
/// There is no notion of turns, check or the end of the game: the match only
/// validates and executes the moves it is asked to make.
///
/// ```
/// use chess_system::chess::ChessMatch;
///
/// let mut chess_match = ChessMatch::new();
/// let captured = chess_match
///     .perform_move("c2".parse()?, "c7".parse()?)?
///     .expect("c7 holds a black rook");
/// assert_eq!(captured.to_string(), "r");
/// # Ok::<(), chess_system::chess::ChessError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChessMatch {
    board: Board<ChessPiece>,
    policy: MovePolicy,
}

impl ChessMatch {
    /// Starts a match with [`MovePolicy::Permissive`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(MovePolicy::default())
    }

    /// Starts a match on an 8x8 board with the initial set of pieces.
    #[must_use]
    pub fn with_policy(policy: MovePolicy) -> Self {
        let board = Board::new(usize::from(BOARD_WIDTH), usize::from(BOARD_WIDTH))
            .expect("8x8 board dimensions are valid");
        let mut chess_match = Self { board, policy };
        chess_match
            .initial_setup()
            .expect("initial setup squares are distinct and on the board");
        chess_match
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn policy(&self) -> MovePolicy {
        self.policy
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn board(&self) -> &Board<ChessPiece> {
        &self.board
    }

    /// Read-only projection of the board for rendering: row 0 is rank 8.
    #[must_use]
    pub fn pieces(&self) -> Grid<Option<PieceView>> {
        self.board.cells().map(|cell| cell.as_ref().map(ChessPiece::view))
    }

    /// Legal destinations of the piece on `source`.
    ///
    /// # Errors
    ///
    /// [`ChessError::NoPieceAtSource`] if the square is empty and, with
    /// [`MovePolicy::Strict`], [`ChessError::NoPossibleMoves`] if the piece
    /// can't move anywhere.
    pub fn possible_moves(&self, source: ChessPosition) -> Result<Grid<bool>, ChessError> {
        let piece = self.validate_source(source)?;
        Ok(piece.possible_moves(&self.board))
    }

    /// Moves the piece from `source` to `target` and returns the piece which
    /// stood on `target`, if any.
    ///
    /// # Errors
    ///
    /// [`ChessError::NoPieceAtSource`] if `source` is empty. With
    /// [`MovePolicy::Strict`] also [`ChessError::NoPossibleMoves`] and
    /// [`ChessError::IllegalMove`]. The board is left untouched on error.
    pub fn perform_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> Result<Option<ChessPiece>, ChessError> {
        let piece = self.validate_source(source)?;
        if self.policy == MovePolicy::Strict
            && !piece.possible_move(&self.board, target.to_position())
        {
            tracing::debug!(%source, %target, "rejected illegal move");
            return Err(ChessError::IllegalMove {
                from: source,
                to: target,
            });
        }
        let captured = self.make_move(source, target)?;
        tracing::debug!(
            %source,
            %target,
            captured = ?captured.as_ref().map(ChessPiece::view),
            "performed move"
        );
        Ok(captured)
    }

    fn make_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> Result<Option<ChessPiece>, ChessError> {
        let piece = self
            .board
            .remove(source.to_position())?
            .ok_or(ChessError::NoPieceAtSource(source))?;
        let captured = self.board.remove(target.to_position())?;
        self.board.place(piece, target.to_position())?;
        Ok(captured)
    }

    fn validate_source(&self, source: ChessPosition) -> Result<&ChessPiece, ChessError> {
        let piece = self
            .board
            .piece_at(source.to_position())?
            .ok_or(ChessError::NoPieceAtSource(source))?;
        if self.policy == MovePolicy::Strict && !piece.has_any_possible_move(&self.board) {
            return Err(ChessError::NoPossibleMoves(source));
        }
        Ok(piece)
    }

    fn place_new_piece(
        &mut self,
        file: char,
        rank: u8,
        piece: ChessPiece,
    ) -> Result<(), ChessError> {
        let position = ChessPosition::new(file, rank)?.to_position();
        self.board.place(piece, position)?;
        Ok(())
    }

    fn initial_setup(&mut self) -> Result<(), ChessError> {
        for (file, rank, kind, color) in INITIAL_SETUP {
            self.place_new_piece(file, rank, ChessPiece::new(kind, color))?;
        }
        Ok(())
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}
