//! Dense two-dimensional storage addressed by [`Position`].

use std::ops::{Index, IndexMut};

use crate::boardgame::position::Position;

/// Row-major `rows x columns` matrix. Row 0 is the first row yielded by
/// [`Grid::iter_rows`].
///
/// `Grid<bool>` is how movement rules report legal destinations: a cell is
/// `true` iff the piece can move there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid and fills each cell with the value produced for its
    /// position.
    ///
    /// # Panics
    ///
    /// If `rows * columns` overflows. [`crate::boardgame::Board::new`]
    /// rejects such dimensions before creating its grid.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let Some(size) = rows.checked_mul(columns) else {
            panic!("{rows}x{columns} grid is too large");
        };
        let mut cells = Vec::with_capacity(size);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(f(Position::new(to_coordinate(row), to_coordinate(column))));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true iff the position addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.offset(position).is_some()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.offset(position).map(|offset| &self.cells[offset])
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.offset(position).map(|offset| &mut self.cells[offset])
    }

    /// Cells of a single row, left to right.
    ///
    /// # Panics
    ///
    /// If `row` is not less than [`Grid::rows`].
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row should be within 0..{}, got {row}", self.rows);
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    /// Iterates over rows from the top one.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero chunk size.
        self.cells.chunks(self.columns.max(1))
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterates over all cells together with their positions.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> {
        let columns = self.columns.max(1);
        self.cells.iter().enumerate().map(move |(offset, cell)| {
            (
                Position::new(to_coordinate(offset / columns), to_coordinate(offset % columns)),
                cell,
            )
        })
    }

    /// Applies `f` to every cell, preserving the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn offset(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        (row < self.rows && column < self.columns).then_some(row * self.columns + column)
    }
}

impl<T: Default> Grid<T> {
    /// Creates a grid filled with default values (`false`, `None`, ...).
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::from_fn(rows, columns, |_| T::default())
    }
}

impl Grid<bool> {
    /// Positions of all `true` cells in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate()
            .filter_map(|(position, &marked)| marked.then_some(position))
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// If the position lies outside of the grid.
    fn index(&self, position: Position) -> &T {
        match self.get(position) {
            Some(cell) => cell,
            None => panic!(
                "position {position} is outside of {}x{} grid",
                self.rows, self.columns
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        let (rows, columns) = (self.rows, self.columns);
        match self.get_mut(position) {
            Some(cell) => cell,
            None => panic!("position {position} is outside of {rows}x{columns} grid"),
        }
    }
}

// Board dimensions are validated to be small, indices always fit.
fn to_coordinate(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
