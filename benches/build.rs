use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unflatten::{PathOptions, RecordBuilder};

fn flat_headers(width: usize) -> Vec<String> {
    (0..width).map(|i| format!("field{i}")).collect()
}

fn nested_headers(width: usize) -> Vec<String> {
    (0..width)
        .map(|i| format!("level0.level1.level2.field{i}"))
        .collect()
}

fn array_headers(rows: usize) -> Vec<String> {
    (0..rows)
        .flat_map(|i| [format!("items.{i}.sku"), format!("items.{i}.qty")])
        .collect()
}

fn values_for(headers: &[String]) -> Vec<String> {
    (0..headers.len()).map(|i| format!("value{i}")).collect()
}

fn benchmark_parse_headers(c: &mut Criterion) {
    let headers = array_headers(32);
    let options = PathOptions::new();

    c.bench_function("parse_64_headers", |b| {
        b.iter(|| RecordBuilder::new(black_box(&headers), &options))
    });
}

fn benchmark_build_flat(c: &mut Criterion) {
    let headers = flat_headers(32);
    let values = values_for(&headers);
    let builder = RecordBuilder::new(&headers, &PathOptions::new()).unwrap();

    c.bench_function("build_flat_record", |b| {
        b.iter(|| builder.build(black_box(&values)))
    });
}

fn benchmark_build_nested(c: &mut Criterion) {
    let headers = nested_headers(32);
    let values = values_for(&headers);
    let builder = RecordBuilder::new(&headers, &PathOptions::new()).unwrap();

    c.bench_function("build_nested_record", |b| {
        b.iter(|| builder.build(black_box(&values)))
    });
}

fn benchmark_build_arrays(c: &mut Criterion) {
    let headers = array_headers(16);
    let values = values_for(&headers);
    let builder = RecordBuilder::new(&headers, &PathOptions::new()).unwrap();

    c.bench_function("build_array_record", |b| {
        b.iter(|| builder.build(black_box(&values)))
    });
}

fn benchmark_batch_scaling(c: &mut Criterion) {
    let headers = array_headers(8);
    let builder = RecordBuilder::new(&headers, &PathOptions::new()).unwrap();
    let mut group = c.benchmark_group("build_all");

    for record_count in [10, 100, 1000] {
        let rows: Vec<Vec<String>> = (0..record_count).map(|_| values_for(&headers)).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            &rows,
            |b, rows| b.iter(|| builder.build_all(black_box(rows.iter().map(|r| r.iter())))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_headers,
    benchmark_build_flat,
    benchmark_build_nested,
    benchmark_build_arrays,
    benchmark_batch_scaling
);
criterion_main!(benches);
