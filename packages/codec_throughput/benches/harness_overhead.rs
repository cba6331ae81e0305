//! Benchmarks to measure the compute overhead of the harness logic itself.
//!
//! Payload generation and report formatting run outside the timed trials, but they still
//! determine how long a full run takes, so they are kept cheap compared to the codec.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Duration;

use codec_throughput::{
    Base64Codec, Codec, PAYLOAD_SIZES, PayloadGenerator, SampleStats, format_bytes,
    format_time_per_op, validate,
};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness_overhead");

    for size in PAYLOAD_SIZES {
        let mut generator = PayloadGenerator::with_seed(42);
        group.bench_function(format!("generate_{size}"), |b| {
            b.iter(|| black_box(generator.generate(black_box(size))));
        });
    }

    {
        let codec = Base64Codec::standard();
        let payload = PayloadGenerator::with_seed(42).generate(65536);
        let encoded = codec.encode(&payload).expect("base64 encoding cannot fail");

        group.bench_function("validate_65536", |b| {
            b.iter(|| black_box(validate(&codec, &payload, black_box(&encoded))));
        });
    }

    group.bench_function("format_bytes", |b| {
        b.iter(|| black_box(format_bytes(black_box(32768))));
    });

    group.bench_function("format_time_per_op", |b| {
        b.iter(|| black_box(format_time_per_op(black_box(Some(Duration::from_nanos(12_345))))));
    });

    {
        let rates: Vec<f64> = (1..=100).map(f64::from).collect();

        group.bench_function("sample_stats_100", |b| {
            b.iter(|| black_box(SampleStats::from_rates(black_box(&rates))));
        });
    }

    group.finish();
}
