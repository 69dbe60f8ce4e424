// Copyright 2020 TiKV Project Authors. Licensed under Apache-2.0.

use std::time::Duration;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use trace_id_bench::OtelTraceIdGenerator;
use trace_id_bench::TraceIdGenerator;
use trace_id_bench::UuidTraceIdGenerator;

fn main() {
    env_logger::init();

    // One-time startup diagnostics, before any measurement.
    trace_id_bench::print_environment();

    benches();
    Criterion::default().configure_from_args().final_summary();
}

fn trace_id_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_id");
    group.throughput(Throughput::Elements(1));

    group.bench_function("uuid_v4", |b| {
        let generator = UuidTraceIdGenerator;
        b.iter(|| black_box(generator.generate()))
    });

    group.bench_function("opentelemetry_random", |b| {
        // Constructed outside the timed closure; the worker owns it for the
        // whole measurement.
        let generator = OtelTraceIdGenerator::new();
        b.iter(|| black_box(generator.generate()))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(10))
        .sample_size(10);
    targets = trace_id_generation
}
