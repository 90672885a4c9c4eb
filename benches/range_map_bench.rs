//! Range map construction and lookup benchmark.
//!
//! Compares sequential `put` against `from_sorted_entries`, and measures
//! lookups hitting ranges versus landing in gaps, for both key widths.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rangemaps::range_map::{NarrowRangeMap, WideRangeMap};
use std::hint::black_box;

const SIZES: [u32; 4] = [100, 1000, 10000, 100000];

/// Ranges of width 8 separated by gaps of 8.
fn generate_narrow_entries(size: u32) -> Vec<(u32, u32, i32)> {
    (0..size)
        .map(|index| (index * 16, index * 16 + 7, index.cast_signed()))
        .collect()
}

/// Same layout as the narrow entries, shifted into the high word.
fn generate_wide_entries(size: u32) -> Vec<(u128, u128, i32)> {
    (0..size)
        .map(|index| {
            let start = (u128::from(index) << 64) * 16;
            (start, start + 7, index.cast_signed())
        })
        .collect()
}

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("range_map_put");

    for size in SIZES {
        let narrow = generate_narrow_entries(size);
        group.bench_with_input(BenchmarkId::new("narrow", size), &size, |bencher, _| {
            bencher.iter_batched(
                || narrow.clone(),
                |entries| {
                    let mut map = NarrowRangeMap::new();
                    for (start, end, value) in entries {
                        map.put(black_box(start), end, value).unwrap();
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            );
        });

        let wide = generate_wide_entries(size);
        group.bench_with_input(BenchmarkId::new("wide", size), &size, |bencher, _| {
            bencher.iter_batched(
                || wide.clone(),
                |entries| black_box(WideRangeMap::from_sorted_entries(black_box(entries)).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("range_map_get");

    for size in SIZES {
        let mut narrow = NarrowRangeMap::from_sorted_entries(generate_narrow_entries(size)).unwrap();
        narrow.trim_to_size();
        let mut wide = WideRangeMap::from_sorted_entries(generate_wide_entries(size)).unwrap();
        wide.trim_to_size();
        let middle = size / 2;

        group.bench_with_input(BenchmarkId::new("narrow_hit", size), &size, |bencher, _| {
            bencher.iter(|| black_box(narrow.get(black_box(middle * 16 + 3))));
        });
        group.bench_with_input(BenchmarkId::new("narrow_gap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(narrow.get(black_box(middle * 16 + 12))));
        });
        group.bench_with_input(BenchmarkId::new("wide_hit", size), &size, |bencher, _| {
            let key = (u128::from(middle) << 64) * 16 + 3;
            bencher.iter(|| black_box(wide.get(black_box(key))));
        });
        group.bench_with_input(BenchmarkId::new("wide_gap", size), &size, |bencher, _| {
            let key = (u128::from(middle) << 64) * 16 + 12;
            bencher.iter(|| black_box(wide.get(black_box(key))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_put, benchmark_get);

criterion_main!(benches);
