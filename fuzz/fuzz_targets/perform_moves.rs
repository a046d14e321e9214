#![no_main]
use chess_system::boardgame::Piece;
use chess_system::chess::{ChessMatch, ChessPosition, MovePolicy};
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

// Every byte pair is a move: low 6 bits of each byte select the square.
fn square(byte: u8) -> ChessPosition {
    let index = byte % 64;
    ChessPosition::new(char::from(b'a' + index % 8), index / 8 + 1)
        .expect("index is within the board")
}

fuzz_target!(|data: &[u8]| {
    for policy in [MovePolicy::Permissive, MovePolicy::Strict] {
        let mut chess_match = ChessMatch::with_policy(policy);
        for (source, target) in data.iter().copied().tuples() {
            let before = chess_match.board().pieces().count();
            match chess_match.perform_move(square(source), square(target)) {
                Ok(Some(_)) => assert_eq!(chess_match.board().pieces().count(), before - 1),
                Ok(None) => assert_eq!(chess_match.board().pieces().count(), before),
                Err(_) => assert_eq!(chess_match.board().pieces().count(), before),
            }
            for (position, cell) in chess_match.board().cells().enumerate() {
                if let Some(piece) = cell {
                    assert_eq!(piece.position(), Some(position));
                }
            }
        }
    }
});
