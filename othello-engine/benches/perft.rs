use criterion::*;

use othello_engine::test_utils::{playout, run_perft};
use othello_engine::Game;

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_playout(c: &mut Criterion) {
    let choices: Vec<usize> = (0..64).map(|i| i * 7 + 3).collect();

    c.bench_function("playout", |b| {
        b.iter(|| {
            let mut game = Game::new();
            playout(&mut game, black_box(&choices))
        })
    });
}

criterion_group! {
    name = perft;
    config = Criterion::default();
    targets = criterion_perft, criterion_playout
}

criterion_main!(perft);
