use criterion::{Criterion, criterion_group, criterion_main};
use fraction::Fraction;
use serde::{Deserialize, Serialize};
use std::hint::black_box;

// ============================================================================
// JSON Serialization/Deserialization
// ============================================================================

fn bench_serialize_json(c: &mut Criterion) {
    c.bench_function("fraction_serialize_json", |b| {
        let f = Fraction::new(-123_456, 789);
        b.iter(|| black_box(serde_json::to_string(&black_box(f)).unwrap()));
    });
}

fn bench_deserialize_json(c: &mut Criterion) {
    c.bench_function("fraction_deserialize_json", |b| {
        let json = r#""-123456/789""#;
        b.iter(|| black_box(serde_json::from_str::<Fraction>(black_box(json)).unwrap()));
    });
}

#[derive(Serialize, Deserialize)]
struct Recipe {
    flour: Fraction,
    sugar: Fraction,
    butter: Fraction,
}

fn bench_struct_serialize_json(c: &mut Criterion) {
    c.bench_function("fraction_struct_serialize_json", |b| {
        let recipe = Recipe {
            flour: Fraction::new(9, 4),
            sugar: Fraction::new(2, 3),
            butter: Fraction::new(1, 2),
        };
        b.iter(|| black_box(serde_json::to_string(&black_box(&recipe)).unwrap()));
    });
}

fn bench_struct_deserialize_json(c: &mut Criterion) {
    c.bench_function("fraction_struct_deserialize_json", |b| {
        let json = r#"{"flour":"9/4","sugar":"2/3","butter":"1/2"}"#;
        b.iter(|| black_box(serde_json::from_str::<Recipe>(black_box(json)).unwrap()));
    });
}

// ============================================================================
// Bincode (Binary Serialization)
// ============================================================================

fn bench_serialize_bincode(c: &mut Criterion) {
    c.bench_function("fraction_serialize_bincode", |b| {
        let f = Fraction::new(-123_456, 789);
        b.iter(|| black_box(bincode::serialize(&black_box(f)).unwrap()));
    });
}

fn bench_deserialize_bincode(c: &mut Criterion) {
    c.bench_function("fraction_deserialize_bincode", |b| {
        let bytes = bincode::serialize(&Fraction::new(-123_456, 789)).unwrap();
        b.iter(|| black_box(bincode::deserialize::<Fraction>(black_box(&bytes)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_serialize_json,
    bench_deserialize_json,
    bench_struct_serialize_json,
    bench_struct_deserialize_json,
    bench_serialize_bincode,
    bench_deserialize_bincode,
);

criterion_main!(benches);
