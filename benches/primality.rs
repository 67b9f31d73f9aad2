use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prime_race::{choose_move, is_prime, GameRng};

fn bench_is_prime(c: &mut Criterion) {
    c.bench_function("is_prime 0..10000", |b| {
        b.iter(|| (0..10_000i64).filter(|&n| is_prime(black_box(n))).count())
    });
}

fn bench_choose_move(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    c.bench_function("choose_move 0..1000", |b| {
        b.iter(|| (0..1_000u32).map(|s| choose_move(black_box(s), &mut rng)).sum::<u32>())
    });
}

criterion_group!(benches, bench_is_prime, bench_choose_move);
criterion_main!(benches);
