use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifebits::aliases::{LargeGame, SmallGame};
use lifebits::{preset, representation, Dimensions};

/// A board with roughly a quarter of its cells alive, scattered the same way on every run.
fn soup(cols: usize, rows: usize) -> LargeGame {
    let dims = Dimensions::new(cols, rows).unwrap();
    let live = (0..dims.cell_count())
        .filter(|i| (i.wrapping_mul(2_654_435_761) >> 13) & 3 == 0)
        .map(|i| dims.coords(i));
    LargeGame::with_live_cells(dims, live).unwrap()
}

fn bench_next_small(c: &mut Criterion) {
    let game = SmallGame::from_text(preset::GLIDER).unwrap();

    c.bench_function("next_8x8_u64", |b| {
        b.iter(|| black_box(&game).next())
    });
}

fn bench_next_64(c: &mut Criterion) {
    let game = soup(64, 64);

    c.bench_function("next_64x64", |b| {
        b.iter(|| black_box(&game).next())
    });
}

fn bench_next_256(c: &mut Criterion) {
    let game = soup(256, 256);

    c.bench_function("next_256x256", |b| {
        b.iter(|| black_box(&game).next())
    });
}

fn bench_next_representation(c: &mut Criterion) {
    let game = soup(256, 256).to_string();

    c.bench_function("next_representation_256x256", |b| {
        b.iter(|| representation::next(black_box(&game)))
    });
}

criterion_group!(
    benches,
    bench_next_small,
    bench_next_64,
    bench_next_256,
    bench_next_representation
);
criterion_main!(benches);
