//! Raw grid addressing.

use std::fmt;

/// Zero-based (row, column) address of a board cell. Row 0 is the top row of
/// the printed board.
///
/// Coordinates are signed: walking off the board (e.g. from row 0 upwards)
/// produces a valid [`Position`] which [`crate::boardgame::Board`] reports as
/// non-existent rather than an arithmetic underflow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn column(self) -> i32 {
        self.column
    }

    /// Returns the neighbouring position in given direction. The result may lie
    /// outside of any board.
    #[must_use]
    pub const fn shift(self, direction: Direction) -> Self {
        let (rows, columns) = direction.delta();
        Self::new(self.row + rows, self.column + columns)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.column)
    }
}

/// Directions on the board as seen on the printed board: Up decreases the row
/// index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as north-west.
    UpLeft,
    /// Also known as north.
    Up,
    /// Also known as north-east.
    UpRight,
    /// Also known as east.
    Right,
    /// Also known as west.
    Left,
    /// Also known as south-west.
    DownLeft,
    /// Also known as south.
    Down,
    /// Also known as south-east.
    DownRight,
}

impl Direction {
    /// All eight directions, including diagonals.
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::Left,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// Straight lines along rows and columns.
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    /// (row, column) offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shift() {
        let position = Position::new(4, 4);
        assert_eq!(position.shift(Direction::Up), Position::new(3, 4));
        assert_eq!(position.shift(Direction::Down), Position::new(5, 4));
        assert_eq!(position.shift(Direction::Left), Position::new(4, 3));
        assert_eq!(position.shift(Direction::Right), Position::new(4, 5));
        assert_eq!(position.shift(Direction::UpLeft), Position::new(3, 3));
        assert_eq!(position.shift(Direction::UpRight), Position::new(3, 5));
        assert_eq!(position.shift(Direction::DownLeft), Position::new(5, 3));
        assert_eq!(position.shift(Direction::DownRight), Position::new(5, 5));
    }

    #[test]
    fn shift_off_the_corner() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.shift(Direction::UpLeft), Position::new(-1, -1));
        assert_eq!(corner.shift(Direction::Up).row(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(7, 2).to_string(), "7, 2");
    }
}
