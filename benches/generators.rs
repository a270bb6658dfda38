use criterion::{criterion_group, criterion_main, Criterion};
use mazeball::{generators, shuffle::ShuffleKind};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::generate_with_rng(32, 32, &mut rng, ShuffleKind::Uniform).unwrap())
    });
}

fn bench_recursive_backtracker_maze_32_legacy_shuffle(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32_legacy_shuffle", move |b| {
        b.iter(|| generators::generate_with_rng(32, 32, &mut rng, ShuffleKind::Legacy).unwrap())
    });
}

fn bench_recursive_backtracker_maze_200(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(200);
    c.bench_function("recursive_backtracker_maze_200", move |b| {
        b.iter(|| generators::generate_with_rng(200, 200, &mut rng, ShuffleKind::Uniform).unwrap())
    });
}

criterion_group!(benches,
                 bench_recursive_backtracker_maze_32,
                 bench_recursive_backtracker_maze_32_legacy_shuffle,
                 bench_recursive_backtracker_maze_200);
criterion_main!(benches);
