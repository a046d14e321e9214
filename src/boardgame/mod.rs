//! Game-agnostic board primitives: grid addressing, the board itself and the
//! interface every piece placed on it implements.

pub mod board;
pub mod error;
pub mod grid;
pub mod position;

pub use board::{Board, Piece};
pub use error::BoardError;
pub use grid::Grid;
pub use position::{Direction, Position};
