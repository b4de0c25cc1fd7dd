//! Criterion benchmarks for the visibility engine.
//! Focus sizes: n in {10, 100, 1_000, 10_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p peripheral

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use peripheral::prelude::*;

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let store = draw_scene(
            SceneCfg {
                count: n,
                extent: 100.0,
            },
            ReplayToken { seed: 43, index: 0 },
        );
        group.bench_with_input(BenchmarkId::new("visible_points", n), &store, |b, store| {
            let q = Query::new(1, 45.0, 50.0).validate(store).unwrap();
            b.iter(|| {
                let _res = visible_points(&q);
            })
        });

        group.bench_with_input(BenchmarkId::new("parse_and_run", n), &store, |b, store| {
            b.iter(|| {
                let q = Query::parse("1 45 50", store).unwrap();
                let _res = visible_points(&q);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visibility);
criterion_main!(benches);
