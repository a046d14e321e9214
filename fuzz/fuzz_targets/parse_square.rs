#![no_main]
use chess_system::chess::ChessPosition;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(square) = s.parse::<ChessPosition>() {
            assert_eq!(square.to_string().parse::<ChessPosition>(), Ok(square));
            assert_eq!(
                ChessPosition::from_position(square.to_position()),
                Ok(square)
            );
        }
    }
});
