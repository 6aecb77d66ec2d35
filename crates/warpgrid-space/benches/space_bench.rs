//! Criterion benchmarks for warpgrid-space: range generation, deduplication and traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use warpgrid_space::{
    incremental_range, incremental_range_int, linear_range_int, unique, DistanceMeasure, Flag,
    MeasureKind, ParamSpace,
};

fn bench_window_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_grid");

    for &len in &[64i64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("incremental", len), &len, |b, &len| {
            b.iter(|| unique(&incremental_range_int(0, len, 100)));
        });
        group.bench_with_input(BenchmarkId::new("linear", len), &len, |b, &len| {
            b.iter(|| unique(&linear_range_int(0, len, 100)));
        });
    }

    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let nested = ParamSpace::new()
        .add(Flag::Epsilon, unique(&incremental_range(0.2, 1.0, 10)))
        .unwrap()
        .add(Flag::WindowSize, unique(&incremental_range_int(0, 100, 10)))
        .unwrap();
    let space = ParamSpace::new()
        .add_conditioned(
            Flag::DistanceMeasure,
            [DistanceMeasure::new(MeasureKind::Lcss)],
            nested,
        )
        .unwrap();

    c.bench_function("enumerate_lcss_10x10", |b| {
        b.iter(|| space.configurations().count());
    });
}

criterion_group!(benches, bench_window_grid, bench_enumerate);
criterion_main!(benches);
