//! Human-facing chess notation and its mapping onto grid [`Position`]s.

use std::fmt;
use std::str::FromStr;

use crate::boardgame::Position;
use crate::chess::error::ChessError;

/// Number of files and ranks of the chessboard.
pub const BOARD_WIDTH: u8 = 8;

/// Square in chess notation: file `'a'..='h'` (column) and rank `1..=8` (row).
///
/// Rank 8 is the top row of the printed board, so it maps onto grid row 0:
///
/// ```
/// use chess_system::boardgame::Position;
/// use chess_system::chess::ChessPosition;
///
/// let square = ChessPosition::new('c', 8).unwrap();
/// assert_eq!(square.to_position(), Position::new(0, 2));
/// assert_eq!(
///     ChessPosition::new('a', 1).unwrap().to_position(),
///     Position::new(7, 0)
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    file: char,
    rank: u8,
}

impl ChessPosition {
    /// Creates a square from its file letter and rank number.
    ///
    /// # Errors
    ///
    /// [`ChessError::InvalidCoordinate`] if the file is not within
    /// `'a'..='h'` or the rank is not within `1..=8`.
    pub fn new(file: char, rank: u8) -> Result<Self, ChessError> {
        match (file, rank) {
            ('a'..='h', 1..=BOARD_WIDTH) => Ok(Self { file, rank }),
            _ => Err(ChessError::InvalidCoordinate(format!("{file}{rank}"))),
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn file(self) -> char {
        self.file
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Converts to grid coordinates: `row = 8 - rank`, `column = file - 'a'`.
    #[must_use]
    pub fn to_position(self) -> Position {
        // The file is validated to be an ASCII letter.
        let column = u32::from(self.file) - u32::from('a');
        Position::new(
            i32::from(BOARD_WIDTH) - i32::from(self.rank),
            i32::try_from(column).unwrap_or(i32::MAX),
        )
    }

    /// Inverse of [`ChessPosition::to_position`].
    ///
    /// # Errors
    ///
    /// [`ChessError::InvalidCoordinate`] if the position is not on the
    /// chessboard.
    pub fn from_position(position: Position) -> Result<Self, ChessError> {
        let file = u8::try_from(position.column())
            .ok()
            .and_then(|column| b'a'.checked_add(column))
            .map(char::from);
        let rank = u8::try_from(i32::from(BOARD_WIDTH) - position.row()).ok();
        match (file, rank) {
            (Some(file), Some(rank)) => Self::new(file, rank),
            _ => Err(ChessError::InvalidCoordinate(position.to_string())),
        }
    }
}

impl FromStr for ChessPosition {
    type Err = ChessError;

    /// Parses squares like `"e2"`: the first character is the file and the
    /// rest is the rank number.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let invalid = || ChessError::InvalidCoordinate(trimmed.to_string());
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.as_str().parse::<u8>().map_err(|_| invalid())?;
        Self::new(file, rank).map_err(|_| invalid())
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_squares() {
        for (file, rank) in ('a'..='h').cartesian_product(1..=8) {
            let square = ChessPosition::new(file, rank).unwrap();
            assert_eq!(square.file(), file);
            assert_eq!(square.rank(), rank);
        }
    }

    #[test]
    fn invalid_squares() {
        for (file, rank) in [('i', 1), ('a', 0), ('a', 9), ('A', 1), ('`', 4), ('h', 255)] {
            assert_eq!(
                ChessPosition::new(file, rank),
                Err(ChessError::InvalidCoordinate(format!("{file}{rank}")))
            );
        }
    }

    #[test]
    fn invalid_square_message() {
        assert_eq!(
            ChessPosition::new('i', 9).unwrap_err().to_string(),
            "invalid chess position 'i9': valid values are from a1 to h8"
        );
    }

    #[test]
    fn to_position() {
        let cases = [
            (('a', 8), Position::new(0, 0)),
            (('h', 8), Position::new(0, 7)),
            (('a', 1), Position::new(7, 0)),
            (('h', 1), Position::new(7, 7)),
            (('e', 2), Position::new(6, 4)),
            (('d', 5), Position::new(3, 3)),
        ];
        for ((file, rank), position) in cases {
            assert_eq!(ChessPosition::new(file, rank).unwrap().to_position(), position);
        }
    }

    #[test]
    fn from_position_is_inverse() {
        for (file, rank) in ('a'..='h').cartesian_product(1..=8) {
            let square = ChessPosition::new(file, rank).unwrap();
            let position = square.to_position();
            assert_eq!(ChessPosition::from_position(position), Ok(square));
            assert_eq!(
                ChessPosition::from_position(position).unwrap().to_position(),
                position
            );
        }
    }

    #[test]
    fn from_position_outside_of_board() {
        for position in [
            Position::new(-1, 0),
            Position::new(8, 0),
            Position::new(0, -1),
            Position::new(0, 8),
        ] {
            assert!(matches!(
                ChessPosition::from_position(position),
                Err(ChessError::InvalidCoordinate(_))
            ));
        }
    }

    #[test]
    fn parse() {
        assert_eq!("e2".parse::<ChessPosition>(), ChessPosition::new('e', 2));
        assert_eq!(" a8\n".parse::<ChessPosition>(), ChessPosition::new('a', 8));
        for input in ["", "e", "e0", "e9", "i1", "22", "e2e4", "e-1", "E2"] {
            assert_eq!(
                input.parse::<ChessPosition>(),
                Err(ChessError::InvalidCoordinate(input.trim().to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(ChessPosition::new('f', 7).unwrap().to_string(), "f7");
    }
}
