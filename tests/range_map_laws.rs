#![cfg(feature = "range_map")]
//! Property-based tests for NarrowRangeMap and WideRangeMap.
//!
//! These tests verify containment, gap and ordering laws over randomly
//! generated sequences of disjoint ranges using proptest.

use proptest::prelude::*;
use rangemaps::range_map::{NarrowRangeMap, WideRangeMap};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for sorted, disjoint `u32` ranges built from (gap, length, value)
/// steps. Gaps are at least one so that neighbouring ranges never touch.
fn arbitrary_narrow_ranges(max_size: usize) -> impl Strategy<Value = Vec<(u32, u32, i32)>> {
    prop::collection::vec((1_u32..1000, 0_u32..1000, any::<i32>()), 0..max_size).prop_map(
        |steps| {
            let mut next = 0_u32;
            let mut ranges = Vec::with_capacity(steps.len());
            for (gap, length, value) in steps {
                let start = next + gap;
                let end = start + length;
                ranges.push((start, end, value));
                next = end;
            }
            ranges
        },
    )
}

/// Strategy for sorted, disjoint `u128` ranges spread across the high word.
/// Gaps are at least two so that the key just before each range is unmapped.
fn arbitrary_wide_ranges(max_size: usize) -> impl Strategy<Value = Vec<(u128, u128, i32)>> {
    prop::collection::vec(
        (2_u128..(1 << 100), 0_u128..(1 << 100), any::<i32>()),
        0..max_size,
    )
    .prop_map(|steps| {
        let mut next = 0_u128;
        let mut ranges = Vec::with_capacity(steps.len());
        for (gap, length, value) in steps {
            let start = next + gap;
            let end = start + length;
            ranges.push((start, end, value));
            next = end;
        }
        ranges
    })
}

fn narrow_map(ranges: &[(u32, u32, i32)]) -> NarrowRangeMap {
    let mut map = NarrowRangeMap::with_capacity(1);
    for &(start, end, value) in ranges {
        map.put(start, end, value).unwrap();
    }
    map
}

fn wide_map(ranges: &[(u128, u128, i32)]) -> WideRangeMap {
    let mut map = WideRangeMap::with_capacity(1);
    for &(start, end, value) in ranges {
        map.put(start, end, value).unwrap();
    }
    map
}

// =============================================================================
// Containment and Gap Laws
// =============================================================================

proptest! {
    /// Law: every key inside an inserted range maps to that range's value.
    #[test]
    fn prop_narrow_containment(ranges in arbitrary_narrow_ranges(64)) {
        let map = narrow_map(&ranges);
        for &(start, end, value) in &ranges {
            prop_assert_eq!(map.get(start), Some(value));
            prop_assert_eq!(map.get(start + (end - start) / 2), Some(value));
            prop_assert_eq!(map.get(end), Some(value));
        }
    }

    /// Law: keys between ranges, before the first and after the last are absent.
    #[test]
    fn prop_narrow_gaps(ranges in arbitrary_narrow_ranges(64)) {
        let map = narrow_map(&ranges);
        let mut gap_start = 0_u32;
        for &(start, end, _) in &ranges {
            if gap_start < start {
                prop_assert_eq!(map.get(gap_start), None);
                prop_assert_eq!(map.get(start - 1), None);
            }
            gap_start = end + 1;
        }
        prop_assert_eq!(map.get(gap_start), None);
        prop_assert_eq!(map.get(u32::MAX), None);
    }

    /// Law: get agrees with a linear scan for any key.
    #[test]
    fn prop_narrow_matches_linear_scan(ranges in arbitrary_narrow_ranges(32), key in 0_u32..40_000) {
        let map = narrow_map(&ranges);
        let expected = ranges
            .iter()
            .find(|&&(start, end, _)| start <= key && key <= end)
            .map(|&(_, _, value)| value);
        prop_assert_eq!(map.get(key), expected);
    }

    /// Law: get agrees with a linear scan for wide keys.
    #[test]
    fn prop_wide_matches_linear_scan(ranges in arbitrary_wide_ranges(32), key: u128) {
        let map = wide_map(&ranges);
        let expected = ranges
            .iter()
            .find(|&&(start, end, _)| start <= key && key <= end)
            .map(|&(_, _, value)| value);
        prop_assert_eq!(map.get(key), expected);
    }

    /// Law: every wide range endpoint is contained, and its neighbours outside are not.
    #[test]
    fn prop_wide_endpoints(ranges in arbitrary_wide_ranges(32)) {
        let map = wide_map(&ranges);
        for &(start, end, value) in &ranges {
            prop_assert_eq!(map.get(start), Some(value));
            prop_assert_eq!(map.get(end), Some(value));
            prop_assert_eq!(map.get(start - 1), None);
            prop_assert_eq!(map.get(end + 1), None);
        }
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Law: iteration yields exactly the inserted ranges, strictly increasing.
    #[test]
    fn prop_iteration_is_strictly_increasing(ranges in arbitrary_narrow_ranges(64)) {
        let map = narrow_map(&ranges);
        let entries: Vec<(u32, u32, i32)> = map
            .iter()
            .map(|entry| (entry.start, entry.end, entry.value))
            .collect();
        prop_assert_eq!(&entries, &ranges);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].1 < pair[1].0);
        }
    }

    /// Law: put fails iff start <= last end, and a failed put changes nothing.
    #[test]
    fn prop_put_rejects_iff_not_after_last_end(
        ranges in arbitrary_narrow_ranges(16),
        start: u32,
        length in 0_u32..100,
    ) {
        let mut map = narrow_map(&ranges);
        let before = map.clone();
        let end = start.saturating_add(length);
        let result = map.put(start, end, 0);
        match ranges.last() {
            Some(&(_, last_end, _)) if start <= last_end => {
                prop_assert!(result.is_err());
                prop_assert_eq!(&map, &before);
            }
            _ => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(map.len(), before.len() + 1);
            }
        }
    }

    /// Law: trimming never changes lookups.
    #[test]
    fn prop_trim_preserves_lookups(ranges in arbitrary_wide_ranges(32), key: u128) {
        let untrimmed = wide_map(&ranges);
        let mut trimmed = untrimmed.clone();
        trimmed.trim_to_size();
        prop_assert_eq!(trimmed.capacity(), trimmed.len());
        prop_assert_eq!(trimmed.get(key), untrimmed.get(key));
        prop_assert_eq!(&trimmed, &untrimmed);
    }
}
