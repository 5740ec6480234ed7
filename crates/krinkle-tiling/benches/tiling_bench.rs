use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use krinkle_tiling::{generate_prototile, generate_tiling, generate_wedge};

fn bench_prototile(c: &mut Criterion) {
    c.bench_function("prototile_k31", |b| {
        b.iter(|| generate_prototile(black_box(7), black_box(31), black_box(31)))
    });
}

fn bench_wedge(c: &mut Criterion) {
    let mut group = c.benchmark_group("wedge");
    for rows in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| generate_wedge(2, 5, 5, black_box(rows)))
        });
    }
    group.finish();
}

fn bench_tiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiling");
    for t in [1i64, 3, 6] {
        group.bench_with_input(BenchmarkId::new("k5_rows8", t), &t, |b, &t| {
            b.iter(|| generate_tiling(2, 5, 5 * t, 8, false))
        });
    }
    group.bench_function("offset_k7_rows8", |b| {
        b.iter(|| generate_tiling(3, 7, 2 * (7 - 3), 8, true))
    });
    group.finish();
}

criterion_group!(benches, bench_prototile, bench_wedge, bench_tiling);
criterion_main!(benches);
