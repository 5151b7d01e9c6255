//! Criterion benchmarks for geometry construction, clipping, and
//! segmentation. Population sizes: n in {100, 1000, 10000}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use percmap::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..8)
        .map(|_| Vector2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
        .collect()
}

fn random_individuals(n: usize, seed: u64) -> Vec<Individual> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Individual::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("build_and_clip", |b| {
        let points = random_points(17);
        let vp = Viewport::around(&points, 1.0).unwrap();
        b.iter_batched(
            || TieToken { seed: 17 }.to_std_rng(),
            |mut rng| {
                let g = build_reference_geometry(
                    &points,
                    ReferencePair { a: 0, b: 1 },
                    0.25,
                    0.2,
                    GeomCfg::default(),
                )
                .unwrap();
                let _bis = clip_line(&g.bisector, &vp, g.cfg, &mut rng).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    for &n in &[100usize, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("classify_aggregate", n), &n, |b, &n| {
            let points = random_points(17);
            let g = build_reference_geometry(
                &points,
                ReferencePair { a: 0, b: 1 },
                0.25,
                0.2,
                GeomCfg::default(),
            )
            .unwrap();
            let individuals = random_individuals(n, 99);
            b.iter(|| {
                let table = classify(&g, &individuals).unwrap();
                let _pct = aggregate(&table);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
