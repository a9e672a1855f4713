use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gilded_rose_inventory::{GildedRose, Item, standard_stock};

/// Repeat the standard stock until it holds `size` items.
fn stock_of_size(size: usize) -> Vec<Item> {
    standard_stock().into_iter().cycle().take(size).collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");
    for size in [9usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || GildedRose::from_items(stock_of_size(size)),
                |mut rose| {
                    rose.advance_one_day();
                    black_box(rose)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_advance_many_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_days");
    for days in [1u32, 30, 365] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter_batched(
                || GildedRose::from_items(stock_of_size(1_000)),
                |mut rose| {
                    rose.advance(black_box(days));
                    black_box(rose)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_one_day, bench_advance_many_days);
criterion_main!(benches);
