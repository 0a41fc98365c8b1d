//! Benchmarks for the render pipeline and facade dispatch

use context_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_pipeline_render(c: &mut Criterion) {
    let pipeline = Pipeline::standard("BenchModule", TimestampFormat::Iso8601)
        .expect("valid context label");
    let event = LogEvent::new(
        Severity::Info,
        "user=%s latency=%d",
        "BenchModule",
        vec![FieldValue::from("alice"), FieldValue::from(42)],
    );

    c.bench_function("pipeline_render", |b| {
        b.iter(|| pipeline.run(black_box(&event)))
    });
}

fn bench_facade_log_to_memory(c: &mut Criterion) {
    let logger = ContextLogger::builder("BenchModule")
        .sink(Severity::Debug, MemorySink::new())
        .build()
        .expect("valid context label");

    c.bench_function("facade_log_memory", |b| {
        b.iter(|| logger.log(black_box("request handled in %d ms"), vec![FieldValue::from(7)]))
    });
}

fn bench_facade_filtered_out(c: &mut Criterion) {
    let logger = ContextLogger::builder("BenchModule")
        .sink(Severity::Error, MemorySink::new())
        .build()
        .expect("valid context label");

    c.bench_function("facade_log_filtered", |b| {
        b.iter(|| logger.debug(black_box("dropped before rendering"), vec![]))
    });
}

fn bench_trace_serialization(c: &mut Criterion) {
    let trace = Trace::structured([
        ("code", serde_json::json!(500)),
        ("path", serde_json::json!("/api/v1/users")),
        ("retryable", serde_json::json!(false)),
    ]);

    c.bench_function("trace_render", |b| b.iter(|| black_box(&trace).render()));
}

criterion_group!(
    benches,
    bench_pipeline_render,
    bench_facade_log_to_memory,
    bench_facade_filtered_out,
    bench_trace_serialization
);
criterion_main!(benches);
