//! Benchmarking conversions between the different core set representations.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use coreset::{BigUint, CoreSet};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

// Every other block of eight cores on a 256-core machine, plus some stragglers.
const DESCRIPTION: &str = "0-7,16-23,32-39,48-55,64-71,80-87,96-103,112-119,128,130,132,200-255";

fn entrypoint(c: &mut Criterion) {
    let cores = CoreSet::from_description(DESCRIPTION).unwrap();
    let mask = cores.to_mask();

    let mut group = c.benchmark_group("CoreSet");

    group.bench_function("from_description", |b| {
        b.iter(|| CoreSet::from_description(black_box(DESCRIPTION)));
    });

    group.bench_function("from_mask", |b| {
        b.iter(|| CoreSet::from_mask(black_box(&mask).clone()));
    });

    group.bench_function("from_mask_u64", |b| {
        b.iter(|| CoreSet::from_mask(black_box(u64::MAX)));
    });

    group.bench_function("to_mask", |b| {
        b.iter(|| -> BigUint { black_box(&cores).to_mask() });
    });

    group.bench_function("to_range_string", |b| {
        b.iter(|| black_box(&cores).to_range_string());
    });

    group.bench_function("to_list", |b| {
        b.iter(|| black_box(&cores).to_list());
    });

    group.finish();
}
