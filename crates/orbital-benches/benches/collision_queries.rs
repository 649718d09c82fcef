// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Collision set throughput.
//!
//! - `rebuild/N`: clear, add N scattered bodies, finish.
//! - `line/N`: 256 short segments against a finished set of N bodies.
//! - `ring/N`: 64 ring queries against the same set.
//!
//! ```sh
//! cargo bench --package orbital-benches --bench collision_queries
//! ```
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orbital_collide::{CollisionSet, Point, Step};
use orbital_dry_tests::{scatter_bodies, FakeBody, Prng};

const WORLD: f64 = 16_384.0;
const SIZES: [usize; 3] = [256, 2048, 8192];

fn finished(bodies: &[FakeBody]) -> CollisionSet<'_, FakeBody> {
    let mut set = CollisionSet::new(256, 64);
    for body in bodies {
        set.add(body);
    }
    set.finish();
    set
}

fn segments(seed: u64, count: usize) -> Vec<(Point, Point)> {
    let mut rng = Prng::from_seed_u64(seed);
    (0..count)
        .map(|_| {
            let from = Point::new(rng.range(0.0, WORLD), rng.range(0.0, WORLD));
            let velocity = Point::new(rng.range(-800.0, 800.0), rng.range(-800.0, 800.0));
            (from, from + velocity)
        })
        .collect()
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    // Stabilize CI runs: explicit warmup/measurement and sample size.
    group
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(8))
        .sample_size(60);

    for &n in &SIZES {
        let bodies = scatter_bodies(0x5eed, n, WORLD, 4.0, 120.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut set = CollisionSet::new(256, 64);
            let mut step = Step::default();
            b.iter(|| {
                step = step.next();
                set.clear(step);
                for body in &bodies {
                    set.add(body);
                }
                set.finish();
                criterion::black_box(set.entry_count());
            });
        });
    }
    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    group
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(8))
        .sample_size(60);

    let paths = segments(0xda7a, 256);
    for &n in &SIZES {
        let bodies = scatter_bodies(0x5eed, n, WORLD, 4.0, 120.0);
        let mut set = finished(&bodies);
        group.throughput(Throughput::Elements(paths.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(from, to) in &paths {
                    if set.line(from, to, None, None, None).is_some() {
                        hits += 1;
                    }
                }
                criterion::black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    group
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(8))
        .sample_size(60);

    let centres: Vec<Point> = segments(0xc1c1, 64).into_iter().map(|(c, _)| c).collect();
    for &n in &SIZES {
        let bodies = scatter_bodies(0x5eed, n, WORLD, 4.0, 120.0);
        let mut set = finished(&bodies);
        group.throughput(Throughput::Elements(centres.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &centre in &centres {
                    total += set.ring(centre, 100.0, 600.0).len();
                }
                criterion::black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_line, bench_ring);
criterion_main!(benches);
