use bitmove_core::perft::perft;
use bitmove_core::Position;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn perft_benchmark(c: &mut Criterion) {
    let position = Position::start_pos();
    c.bench_function("perft 3", |b| {
        b.iter(|| perft(black_box(&position), 3));
    });
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
