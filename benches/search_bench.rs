use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku::{Board, Pos, Searcher, Stone};

fn midgame_board() -> Board {
    let mut board = Board::new(15).unwrap();
    let moves = [
        (7, 7, Stone::Black),
        (8, 8, Stone::White),
        (6, 6, Stone::Black),
        (8, 6, Stone::White),
        (7, 5, Stone::Black),
        (7, 8, Stone::White),
        (5, 7, Stone::Black),
        (9, 7, Stone::White),
    ];
    for (r, c, stone) in moves {
        board.place_stone(stone, Pos::new(r, c));
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| black_box(&board).evaluate(Stone::Black))
    });
}

fn bench_search(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for depth in [1u8, 2] {
        group.bench_function(format!("depth_{depth}"), |b| {
            let mut searcher = Searcher::seeded(0);
            b.iter(|| searcher.best_move(black_box(&board), depth, Stone::Black))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
