//! IAI-Callgrind benchmark for range map lookups.
//!
//! Measures instruction counts for a single lookup in a trimmed map of
//! 100000 ranges, for both key widths.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use rangemaps::range_map::{NarrowRangeMap, WideRangeMap};
use std::hint::black_box;

const SIZE: u32 = 100_000;

fn setup_narrow() -> NarrowRangeMap {
    let mut map = NarrowRangeMap::from_sorted_entries(
        (0..SIZE).map(|index| (index * 16, index * 16 + 7, index.cast_signed())),
    )
    .unwrap();
    map.trim_to_size();
    map
}

fn setup_wide() -> WideRangeMap {
    let mut map = WideRangeMap::from_sorted_entries((0..SIZE).map(|index| {
        let start = (u128::from(index) << 64) * 16;
        (start, start + 7, index.cast_signed())
    }))
    .unwrap();
    map.trim_to_size();
    map
}

#[library_benchmark]
#[bench::with_setup(setup_narrow())]
fn narrow_get(map: NarrowRangeMap) -> Option<i32> {
    black_box(map.get(black_box(SIZE / 2 * 16 + 3)))
}

#[library_benchmark]
#[bench::with_setup(setup_wide())]
fn wide_get(map: WideRangeMap) -> Option<i32> {
    black_box(map.get(black_box((u128::from(SIZE / 2) << 64) * 16 + 3)))
}

library_benchmark_group!(
    name = range_map_lookup_group;
    benchmarks = narrow_get, wide_get
);

main!(library_benchmark_groups = range_map_lookup_group);
