use std::hint::black_box;
use std::str::FromStr;

use criterion::{Criterion, criterion_group, criterion_main};
use fraction::Fraction;

fn bench_construction(c: &mut Criterion) {
    c.bench_function("fraction_new_reduce", |b| {
        b.iter(|| black_box(Fraction::try_new(black_box(360_360), black_box(-720_720))));
    });
}

fn bench_addition(c: &mut Criterion) {
    c.bench_function("fraction_addition", |b| {
        let x = Fraction::new(123_456, 789);
        let y = Fraction::new(987_654, 321);
        b.iter(|| black_box(black_box(x) + black_box(y)));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("fraction_subtraction", |b| {
        let x = Fraction::new(987_654, 321);
        let y = Fraction::new(123_456, 789);
        b.iter(|| black_box(black_box(x) - black_box(y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("fraction_multiplication", |b| {
        let x = Fraction::new(123_456, 789);
        let y = Fraction::new(9_876, 543);
        b.iter(|| black_box(black_box(x) * black_box(y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("fraction_division", |b| {
        let x = Fraction::new(123_456, 789);
        let y = Fraction::new(9_876, 543);
        b.iter(|| black_box(black_box(x) / black_box(y)));
    });
}

fn bench_pow(c: &mut Criterion) {
    c.bench_function("fraction_pow", |b| {
        let x = Fraction::new(21, 20);
        b.iter(|| black_box(black_box(x).try_pow(black_box(10))));
    });
}

fn bench_comparison_fast_path(c: &mut Criterion) {
    c.bench_function("fraction_comparison_same_denominator", |b| {
        let x = Fraction::new(1, 7);
        let y = Fraction::new(3, 7);
        b.iter(|| black_box(black_box(x) < black_box(y)));
    });
}

fn bench_comparison_cross_multiply(c: &mut Criterion) {
    c.bench_function("fraction_comparison_cross_multiply", |b| {
        let x = Fraction::new(123_456, 789);
        let y = Fraction::new(987_654, 6_311);
        b.iter(|| black_box(black_box(x) < black_box(y)));
    });
}

fn bench_from_f64(c: &mut Criterion) {
    c.bench_function("fraction_from_f64_bounded", |b| {
        let v = 1.0_f64 / 3.0;
        b.iter(|| black_box(Fraction::try_from_f64(black_box(v))));
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("fraction_parsing", |b| {
        b.iter(|| black_box(Fraction::from_str(black_box("-123456/789")).unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("fraction_formatting", |b| {
        let d = Fraction::new(-123_456, 789);
        b.iter(|| black_box(d.to_string()));
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("fraction_sum_harmonic_20", |b| {
        let values: Vec<Fraction> = (1..=20).map(|i| Fraction::new(1, i)).collect();
        b.iter(|| black_box(black_box(&values).iter().sum::<Fraction>()));
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_pow,
    bench_comparison_fast_path,
    bench_comparison_cross_multiply,
    bench_from_f64,
    bench_parsing,
    bench_formatting,
    bench_sum,
);

criterion_main!(benches);
