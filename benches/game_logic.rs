use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{get_shape, rotate_cw, GameEngine, Grid, ScriptedShapes};
use blockfall::types::{Phase, PieceKind, DROP_INTERVAL_MS};

fn running_engine() -> GameEngine {
    let mut engine =
        GameEngine::new(12345).with_shape_source(Box::new(ScriptedShapes::repeating(PieceKind::T)));
    engine.start().expect("fresh engine starts");
    engine
}

fn bench_advance_time(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("advance_time_16ms", |b| {
        b.iter(|| {
            if engine.phase() != Phase::Running {
                engine = running_engine();
            }
            engine.advance_time(black_box(16)).unwrap();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("move_piece_sideways", |b| {
        b.iter(|| {
            engine.move_piece(black_box(1), 0).unwrap();
            engine.move_piece(black_box(-1), 0).unwrap();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("rotate_in_place", |b| {
        b.iter(|| {
            engine.rotate().unwrap();
        })
    });
}

fn bench_rotate_matrix(c: &mut Criterion) {
    let shape = get_shape(PieceKind::J);

    c.bench_function("rotate_cw_matrix", |b| {
        b.iter(|| rotate_cw(black_box(&shape)))
    });
}

fn bench_overflow_scan(c: &mut Criterion) {
    let mut grid = Grid::new();
    grid.occupy(19, 12);

    c.bench_function("overflow_row_scan", |b| {
        b.iter(|| black_box(&grid).overflow_row_occupied())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("autoplay_to_game_over", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(black_box(7));
            engine.start().unwrap();
            while engine.phase() == Phase::Running {
                engine.advance_time(DROP_INTERVAL_MS).unwrap();
            }
            engine.score()
        })
    });
}

criterion_group!(
    benches,
    bench_advance_time,
    bench_move,
    bench_rotate,
    bench_rotate_matrix,
    bench_overflow_scan,
    bench_full_game
);
criterion_main!(benches);
