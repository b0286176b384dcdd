use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3::core::{BoardRng, EngineConfig, Grid, ScanMode};
use match3::engine::Resolver;
use match3::types::Coord;

fn bench_generate(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut rng = BoardRng::new(12345);

    c.bench_function("generate_7x7", |b| {
        b.iter(|| Grid::generate(black_box(&config), &mut rng))
    });
}

fn bench_scan(c: &mut Criterion) {
    let grid = Grid::generate(&EngineConfig::default(), &mut BoardRng::new(12345));

    c.bench_function("scan_play", |b| {
        b.iter(|| black_box(&grid).scan(ScanMode::Play))
    });
}

fn bench_has_legal_move(c: &mut Criterion) {
    // Diagonal stripes: every swap is tried before giving up.
    let dead = Grid::from_strs(
        &["ABCABCA", "BCABCAB", "CABCABC", "ABCABCA", "BCABCAB", "CABCABC", "ABCABCA"],
        3,
    )
    .unwrap();

    c.bench_function("has_legal_move_dead_board", |b| {
        b.iter(|| black_box(&dead).has_legal_move())
    });
}

fn bench_reshuffle(c: &mut Criterion) {
    let grid = Grid::generate(&EngineConfig::default(), &mut BoardRng::new(12345));
    let mut rng = BoardRng::new(1);

    c.bench_function("reshuffle_7x7", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            grid.reshuffle(&mut rng);
            grid
        })
    });
}

fn bench_attempt_swap(c: &mut Criterion) {
    let base = Resolver::new(EngineConfig::default(), 12345).unwrap();
    let size = base.grid_size();
    let swaps: Vec<(Coord, Coord)> = (0..size)
        .flat_map(|row| {
            (0..size - 1).map(move |col| (Coord::new(row, col), Coord::new(row, col + 1)))
        })
        .collect();

    c.bench_function("attempt_swap_row_sweep", |b| {
        b.iter(|| {
            let mut resolver = base.clone();
            for &(a, b) in &swaps {
                black_box(resolver.attempt_swap(a, b));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_scan,
    bench_has_legal_move,
    bench_reshuffle,
    bench_attempt_swap
);
criterion_main!(benches);
