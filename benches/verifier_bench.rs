// Structural verification benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdsync::verifier::{PatternCounter, StructureCounter, count_elements};
use std::hint::black_box;

mod common;

fn bench_count_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("verifier_count");
    for sections in [10, 100, 1_000] {
        let doc = common::generate_document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &doc, |b, doc| {
            b.iter(|| black_box(count_elements(doc)));
        });
    }
    group.finish();
}

fn bench_verify_pair(c: &mut Criterion) {
    let source = common::generate_document(500);
    let translated = common::generate_japanese_document(500);
    c.bench_function("verifier_verify_pair", |b| {
        b.iter(|| black_box(PatternCounter.verify(&source, &translated)));
    });
}

criterion_group!(benches, bench_count_elements, bench_verify_pair);
criterion_main!(benches);
