//! Criterion benchmarks for category_logger

use category_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(1));

    let logger = CategoryLogger::detached(Some("Bench"));

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(Severity::Warning))));
    });

    group.bench_function("is_code_enabled_invalid", |b| {
        b.iter(|| black_box(logger.is_code_enabled(black_box(99))));
    });

    group.bench_function("set_enabled_toggle", |b| {
        b.iter(|| {
            logger.set_enabled(black_box(Severity::Info), false);
            logger.set_enabled(black_box(Severity::Info), true);
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let prefixed = CategoryLogger::with_sink(Some("Bench"), Arc::new(NullSink));
    let plain = CategoryLogger::with_sink(None, Arc::new(NullSink));

    group.bench_function("enabled_prefixed", |b| {
        b.iter(|| prefixed.info(black_box("Info message")));
    });

    group.bench_function("enabled_unprefixed", |b| {
        b.iter(|| plain.info(black_box("Info message")));
    });

    group.bench_function("enabled_formatted", |b| {
        b.iter(|| category_logger::info!(prefixed, "value {}", black_box(42)));
    });

    let silenced = CategoryLogger::with_sink(Some("Bench"), Arc::new(NullSink));
    silenced.set_all_enabled(false);

    group.bench_function("disabled_formatted", |b| {
        b.iter(|| category_logger::info!(silenced, "value {}", black_box(42)));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_emission);
criterion_main!(benches);
