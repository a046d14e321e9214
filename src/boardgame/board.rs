//! The board owns every piece placed on it and keeps each piece's recorded
//! position in sync with the cell holding it.

use crate::boardgame::error::BoardError;
use crate::boardgame::grid::Grid;
use crate::boardgame::position::Position;

/// Occupant of a [`Board`] cell.
///
/// Pieces do not hold a reference to their board: movement rules receive it
/// explicitly and can only query it. Occupancy changes go exclusively through
/// [`Board::place`] and [`Board::remove`].
pub trait Piece: Sized {
    /// Position of the cell holding the piece, [`None`] while it is off the
    /// board.
    fn position(&self) -> Option<Position>;

    /// Updates the recorded position. Only [`Board`] calls this, in lockstep
    /// with its own cell updates.
    fn set_position(&mut self, position: Option<Position>);

    /// Marks every cell the piece could move to given the current occupancy of
    /// `board`. The result has the same dimensions as `board`.
    fn possible_moves(&self, board: &Board<Self>) -> Grid<bool>;

    /// Returns true iff `position` is one of the [`Piece::possible_moves`].
    /// Positions outside of the board are never possible.
    fn possible_move(&self, board: &Board<Self>, position: Position) -> bool {
        self.possible_moves(board)
            .get(position)
            .copied()
            .unwrap_or(false)
    }

    /// Returns true iff the piece can move anywhere at all.
    fn has_any_possible_move(&self, board: &Board<Self>) -> bool {
        self.possible_moves(board).iter().any(|&possible| possible)
    }
}

/// Fixed-size grid with at most one piece per cell.
#[derive(Clone, Debug)]
pub struct Board<P> {
    pieces: Grid<Option<P>>,
}

impl<P: Piece> Board<P> {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidDimensions`] if `rows` or `columns` is zero, does
    /// not fit a [`Position`] coordinate or the cell count overflows.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        let addressable = i32::try_from(rows).is_ok()
            && i32::try_from(columns).is_ok()
            && rows.checked_mul(columns).is_some();
        if rows < 1 || columns < 1 || !addressable {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            pieces: Grid::from_fn(rows, columns, |_| None),
        })
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn rows(&self) -> usize {
        self.pieces.rows()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn columns(&self) -> usize {
        self.pieces.columns()
    }

    /// Returns the piece at given row and column, if any.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the cell is not on the board.
    pub fn piece(&self, row: i32, column: i32) -> Result<Option<&P>, BoardError> {
        self.piece_at(Position::new(row, column))
    }

    /// Returns the piece at given position, if any.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the position is not on the board.
    pub fn piece_at(&self, position: Position) -> Result<Option<&P>, BoardError> {
        self.pieces
            .get(position)
            .map(Option::as_ref)
            .ok_or(BoardError::OutOfBounds(position))
    }

    /// Puts the piece on an empty cell and records the position in it.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the position is not on the board and
    /// [`BoardError::CellOccupied`] if the cell already holds a piece. The
    /// board is left intact in both cases.
    pub fn place(&mut self, mut piece: P, position: Position) -> Result<(), BoardError> {
        let cell = self
            .pieces
            .get_mut(position)
            .ok_or(BoardError::OutOfBounds(position))?;
        if cell.is_some() {
            return Err(BoardError::CellOccupied(position));
        }
        piece.set_position(Some(position));
        *cell = Some(piece);
        tracing::trace!(%position, "placed piece");
        Ok(())
    }

    /// Takes the piece off the cell, clearing its recorded position. Returns
    /// [`None`] if the cell was empty.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the position is not on the board.
    pub fn remove(&mut self, position: Position) -> Result<Option<P>, BoardError> {
        let cell = self
            .pieces
            .get_mut(position)
            .ok_or(BoardError::OutOfBounds(position))?;
        let removed = cell.take().map(|mut piece| {
            piece.set_position(None);
            piece
        });
        if removed.is_some() {
            tracing::trace!(%position, "removed piece");
        }
        Ok(removed)
    }

    /// Pure bounds check.
    #[must_use]
    pub fn position_exists(&self, position: Position) -> bool {
        self.pieces.contains(position)
    }

    /// Returns true iff the cell holds a piece.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the position is not on the board.
    pub fn is_occupied(&self, position: Position) -> Result<bool, BoardError> {
        Ok(self.piece_at(position)?.is_some())
    }

    /// Iterates over all pieces on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &P> {
        self.pieces.iter().flatten()
    }

    /// Read-only view of every cell.
    #[must_use]
    pub const fn cells(&self) -> &Grid<Option<P>> {
        &self.pieces
    }
}
