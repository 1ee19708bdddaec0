use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csv_codec::{
    field, parse_table_with_config, serialize_row_with_config, serialize_table_with_config,
    CsvConfig,
};

fn configs() -> [(&'static str, CsvConfig); 3] {
    [
        ("default", CsvConfig::new()),
        ("pipe_delimiter", CsvConfig::new().with_item_delimiter("|")),
        ("long_delimiter", CsvConfig::new().with_item_delimiter("~^~")),
    ]
}

fn table(size: usize) -> Vec<Vec<String>> {
    (0..size)
        .map(|i| {
            vec![
                i.to_string(),
                format!("Product {}", i),
                format!("between \"quotes\" {}", i),
                format!("with, comma {}", i),
            ]
        })
        .collect()
}

fn benchmark_encode_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_field");

    for (name, config) in configs() {
        group.bench_function(BenchmarkId::new("plain", name), |b| {
            b.iter(|| field::encode(black_box("Chef Anton's Cajun Seasoning"), &config))
        });
        group.bench_function(BenchmarkId::new("escaped", name), |b| {
            b.iter(|| field::encode(black_box("5\"five,six\" and \"7,7.1\""), &config))
        });
    }
    group.finish();
}

fn benchmark_decode_field(c: &mut Criterion) {
    let config = CsvConfig::new();

    c.bench_function("decode_field_doubled_quotes", |b| {
        b.iter(|| field::decode(black_box("\"5\"\"five,six\"\" and \"\"7,7.1\"\"\""), &config))
    });
}

fn benchmark_serialize_row(c: &mut Criterion) {
    let row = ["1", "2", "3\"", "4", "5\"five,six\"", "7,7.1", "\"7,7.1\"", "8"];

    for (name, config) in configs() {
        c.bench_function(&format!("serialize_row_{}", name), |b| {
            b.iter(|| serialize_row_with_config(black_box(row), &config))
        });
    }
}

fn benchmark_serialize_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_table");
    let config = CsvConfig::new();

    for size in [10, 100, 1000].iter() {
        let rows = table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| serialize_table_with_config(black_box(rows), &config))
        });
    }
    group.finish();
}

fn benchmark_parse_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_table");

    for (name, config) in configs() {
        let text = serialize_table_with_config(&table(100), &config);
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| parse_table_with_config(black_box(text), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_field,
    benchmark_decode_field,
    benchmark_serialize_row,
    benchmark_serialize_table,
    benchmark_parse_table
);
criterion_main!(benches);
