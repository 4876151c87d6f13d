use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tsvtab::sort::{KeySpec, sort_table};
use tsvtab::table::{TableLimits, read_table};
use tsvtab::tabulate::tabulate;

fn generate_tsv(rows: usize) -> Vec<u8> {
    let mut data = b"Country\tCity\tYear\tPop\tArea\n".to_vec();
    for i in 0..rows {
        let line = format!(
            "C{:02}\tCity{:03}\t{}\t{}\t{}\n",
            (i * 7) % 23,
            (i * 13) % 101,
            2000 + i % 25,
            i * 31,
            i % 977
        );
        data.extend_from_slice(line.as_bytes());
    }
    data
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_table");
    for rows in [100, 1000] {
        let data = generate_tsv(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| read_table(black_box(data), &TableLimits::default()))
        });
    }
    group.finish();
}

fn bench_sort_and_tabulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_tabulate");
    let keys = KeySpec::from_indices(&[0, 1], 5).unwrap();
    for rows in [100, 1000] {
        let limits = TableLimits {
            max_rows: rows,
            ..TableLimits::default()
        };
        let table = read_table(&generate_tsv(rows), &limits);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                let mut t = table.clone();
                sort_table(&mut t, &keys);
                black_box(tabulate(&t.rows, &keys))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read, bench_sort_and_tabulate);
criterion_main!(benches);
