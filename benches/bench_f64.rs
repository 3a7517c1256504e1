//! f64 baseline for the same workloads as `bench_fraction`.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_addition(c: &mut Criterion) {
    c.bench_function("f64_addition", |b| {
        let x = 123_456.0_f64 / 789.0;
        let y = 987_654.0_f64 / 321.0;
        b.iter(|| black_box(black_box(x) + black_box(y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("f64_multiplication", |b| {
        let x = 123_456.0_f64 / 789.0;
        let y = 9_876.0_f64 / 543.0;
        b.iter(|| black_box(black_box(x) * black_box(y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("f64_division", |b| {
        let x = 123_456.0_f64 / 789.0;
        let y = 9_876.0_f64 / 543.0;
        b.iter(|| black_box(black_box(x) / black_box(y)));
    });
}

fn bench_powi(c: &mut Criterion) {
    c.bench_function("f64_powi", |b| {
        let d = 1.05_f64;
        b.iter(|| black_box(black_box(d).powi(10)));
    });
}

fn bench_comparison(c: &mut Criterion) {
    c.bench_function("f64_comparison", |b| {
        let x = 123_456.0_f64 / 789.0;
        let y = 987_654.0_f64 / 6_311.0;
        b.iter(|| black_box(black_box(x) < black_box(y)));
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("f64_sum_harmonic_20", |b| {
        let values: Vec<f64> = (1..=20).map(|i| 1.0 / i as f64).collect();
        b.iter(|| black_box(black_box(&values).iter().sum::<f64>()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_powi,
    bench_comparison,
    bench_sum,
);

criterion_main!(benches);
