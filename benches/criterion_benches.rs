use criterion::{criterion_group, criterion_main, Benchmark, Criterion};

use sokobot::config::{Limits, Method};
use sokobot::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(c, Method::Moves, "levels/custom/04-two-boxes.txt", 100);
}

#[allow(unused)]
fn bench_three_in_a_row(c: &mut Criterion) {
    bench_level(c, Method::Moves, "levels/custom/05-three-in-a-row.txt", 50);
}

#[allow(unused)]
fn bench_three_in_a_row_pushes(c: &mut Criterion) {
    bench_level(c, Method::Pushes, "levels/custom/05-three-in-a-row.txt", 50);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts the whole state space
    bench_level(c, Method::Moves, "levels/custom/no-solution-parking.txt", 100);
}

fn bench_level(c: &mut Criterion, method: Method, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    c.bench(
        &format!("{}", method),
        Benchmark::new(level_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    level.solve(criterion::black_box(method), &Limits::unbounded()),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_two_boxes,
    bench_three_in_a_row,
    bench_three_in_a_row_pushes,
    bench_no_solution,
);
criterion_main!(benches);
