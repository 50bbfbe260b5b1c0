//! Criterion micro-benchmarks for construction, element access and
//! resizing assignment across the four storage strategies.

use criterion::{criterion_group, criterion_main, Criterion};
use dense::prelude::*;
use dense_bench::{fill_and_sum, reassign_cycle};
use std::hint::black_box;

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.bench_function("fixed_4x4", |b| {
        b.iter(|| black_box(Matrix4d::identity(4, 4)));
    });
    group.bench_function("dynamic_4x4", |b| {
        b.iter(|| black_box(MatrixXd::identity(4, 4)));
    });
    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_and_sum");
    let mut fixed = Matrix4d::default();
    group.bench_function("fixed_4x4", |b| {
        b.iter(|| black_box(fill_and_sum(&mut fixed)));
    });
    let mut dyn_rows = Matrix::<f64, Dyn, U4>::new(4, 4);
    group.bench_function("dyn_rows_4x4", |b| {
        b.iter(|| black_box(fill_and_sum(&mut dyn_rows)));
    });
    let mut dynamic = MatrixXd::new(256, 256);
    group.bench_function("dynamic_256x256", |b| {
        b.iter(|| black_box(fill_and_sum(&mut dynamic)));
    });
    group.finish();
}

fn bench_reassign(c: &mut Criterion) {
    let small = MatrixXd::identity(8, 8);
    let large = MatrixXd::identity(128, 128);
    let mut dst = MatrixXd::new(1, 1);
    c.bench_function("reassign_cycle_8_128", |b| {
        b.iter(|| reassign_cycle(black_box(&mut dst), &small, &large, 4));
    });
}

criterion_group!(benches, bench_construct, bench_access, bench_reassign);
criterion_main!(benches);
