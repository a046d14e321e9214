//! Criterion benchmarks measure time of legal destination computation.

use chess_system::boardgame::{Board, Piece, Position};
use chess_system::chess::{ChessMatch, ChessPiece, Color};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn all_destinations(board: &Board<ChessPiece>) {
    for piece in board.pieces() {
        drop(std::hint::black_box(piece.possible_moves(board)));
    }
}

fn open_board() -> Board<ChessPiece> {
    let mut board = Board::new(8, 8).unwrap();
    board
        .place(ChessPiece::rook(Color::White), Position::new(3, 3))
        .unwrap();
    board
        .place(ChessPiece::king(Color::Black), Position::new(4, 4))
        .unwrap();
    board
}

fn movegen_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Move generation");
    let boards = [
        ("initial setup", ChessMatch::new().board().clone()),
        ("open board", open_board()),
    ];
    for (name, board) in &boards {
        group.throughput(criterion::Throughput::Elements(
            board.pieces().count() as u64,
        ));
        group.bench_with_input(BenchmarkId::new("destinations", name), board, |b, board| {
            b.iter(|| all_destinations(board));
        });
    }
    group.finish();
}

criterion_group! {
    name = movegen;
    config = Criterion::default().sample_size(100);
    targets = movegen_bench
}
criterion_main!(movegen);
