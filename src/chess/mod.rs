//! Chess on top of [`crate::boardgame`]: notation, pieces with their movement
//! rules and the match which executes moves.

pub mod chess_match;
pub mod color;
pub mod error;
pub mod piece;
pub mod position;
mod pieces;

pub use chess_match::{ChessMatch, MovePolicy};
pub use color::Color;
pub use error::ChessError;
pub use piece::{ChessPiece, PieceKind, PieceView};
pub use position::ChessPosition;
