//! Benchmarks for VIN validation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vincheck_validator::foundation::Validate;
use vincheck_validator::{Vin, check_digit, is_valid_vin, validators::vin};

const INPUTS: [(&str, &str); 5] = [
    ("valid", "1M8GDM9AXKP042788"),
    ("valid_padded_lowercase", "  1m8gdm9axkp042788  "),
    ("wrong_length", "1M8GDM9AXKP04278"),
    ("illegal_character", "1M8GDM9AXKP04I788"),
    ("check_digit_mismatch", "1N8GDM9AXKP042788"),
];

// ============================================================================
// Boolean entry point
// ============================================================================

fn bench_is_valid_vin(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_vin");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| is_valid_vin(black_box(input)));
        });
    }
    group.finish();
}

// ============================================================================
// Detailed results
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("vin_parse");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| Vin::parse(black_box(input)));
        });
    }
    group.finish();
}

fn bench_validator(c: &mut Criterion) {
    let validator = vin();
    let mut group = c.benchmark_group("vin_validator");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| validator.validate(black_box(input)));
        });
    }
    group.finish();
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit", |b| {
        b.iter(|| check_digit(black_box("1M8GDM9A?KP042788")));
    });
}

criterion_group!(
    benches,
    bench_is_valid_vin,
    bench_parse,
    bench_validator,
    bench_check_digit
);
criterion_main!(benches);
