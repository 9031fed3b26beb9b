use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{ghost, Board, DropScheduler, GameSession, Piece, ScriptedRng, SimpleRng};
use blockfall::types::PieceKind;

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let rows = black_box(&board).completed_rows();
            board.clear(&rows)
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 19 - (x % 3), Some(PieceKind::S));
    }
    let piece = Piece::new(PieceKind::T);

    c.bench_function("ghost_projection", |b| {
        b.iter(|| ghost(black_box(&board), black_box(&piece)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop", |b| {
        b.iter_batched(
            || GameSession::new(ScriptedRng::repeat(PieceKind::L)),
            |s| s.hard_drop(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_scheduler_frame(c: &mut Criterion) {
    let mut sched = DropScheduler::new();
    sched.start(0);
    let mut session = Some(GameSession::new(SimpleRng::new(12345)));
    let mut now = 0u64;

    c.bench_function("scheduler_frame_16ms", |b| {
        b.iter(|| {
            now += 16;
            let mut s = session.take().unwrap_or_default();
            s = sched.drive(black_box(now), s);
            if s.is_game_over() {
                s = s.restart();
            }
            session = Some(s);
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_ghost,
    bench_hard_drop,
    bench_scheduler_frame
);
criterion_main!(benches);
