// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for navigation operations.
//!
//! Measures the performance of:
//! - Route table matching (static and parametrized paths)
//! - Navigation resolution (background/overlay split)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wayfare::navigation::{match_path, resolve, Location};

/// Benchmark route matching across the whole path vocabulary.
fn bench_match_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_matching");

    group.bench_function("static_path", |b| {
        b.iter(|| black_box(match_path(black_box("/social/upload"))));
    });

    group.bench_function("parametrized_path", |b| {
        b.iter(|| black_box(match_path(black_box("/location/harbor-market"))));
    });

    group.bench_function("unmatched_path", |b| {
        b.iter(|| black_box(match_path(black_box("/does-not-exist"))));
    });

    group.finish();
}

/// Benchmark navigation resolution with and without a background payload.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let plain = Location::new("/home");
    group.bench_function("base_only", |b| {
        b.iter(|| black_box(resolve(black_box(&plain))));
    });

    let modal = Location::modal("/login", &Location::new("/home"));
    group.bench_function("base_plus_overlay", |b| {
        b.iter(|| black_box(resolve(black_box(&modal))));
    });

    group.finish();
}

criterion_group!(benches, bench_match_path, bench_resolve);
criterion_main!(benches);
