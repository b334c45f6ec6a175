use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use validation::assumes;
use validation::{describe, from_bytes, to_bytes, InternalError, ReportConfig};

fn nested_failure() -> InternalError {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "sector unreadable");
    let inner = assumes::fail_with("index out of sync", Arc::new(io));
    assumes::fail_with("bad state", Arc::new(inner))
}

fn checks_benchmark(c: &mut Criterion) {
    c.bench_function("assume/pass", |b| {
        b.iter(|| assumes::that(black_box(true)).expect("holds"));
    });
    c.bench_function("assume/fail", |b| {
        b.iter(|| assumes::that_with(black_box(false), || "slot past end").unwrap_err());
    });
}

fn report_benchmark(c: &mut Criterion) {
    let err = nested_failure();
    let config = ReportConfig::default();
    c.bench_function("report/describe", |b| {
        b.iter(|| describe(black_box(&err), &config));
    });
    c.bench_function("report/binary_round_trip", |b| {
        b.iter(|| {
            let bytes = to_bytes(black_box(&err)).expect("serialize");
            from_bytes::<InternalError>(&bytes).expect("deserialize")
        });
    });
}

criterion_group!(benches, checks_benchmark, report_benchmark);
criterion_main!(benches);
