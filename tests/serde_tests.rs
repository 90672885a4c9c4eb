#![cfg(feature = "serde")]

//! Integration tests for serde support in rangemaps.
//!
//! Range maps serialize as a sequence of `(start, end, value)` tuples and
//! re-check ordering when deserialized.

use rangemaps::range_map::{NarrowRangeMap, WideRangeMap};
use rstest::rstest;

#[rstest]
fn test_narrow_serializes_as_tuples() {
    let map = NarrowRangeMap::from_sorted_entries([(10, 20, 1), (25, 30, 2)]).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, "[[10,20,1],[25,30,2]]");
}

#[rstest]
fn test_narrow_json_roundtrip() {
    let map = NarrowRangeMap::from_sorted_entries([(10, 20, 1), (25, 30, 2), (100, 200, 3)]).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    let restored: NarrowRangeMap = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
    assert_eq!(restored.capacity(), 3);
    assert_eq!(restored.get(150), Some(3));
}

#[rstest]
fn test_wide_json_roundtrip() {
    let map = WideRangeMap::from_sorted_entries([(0, 1 << 64, 1), ((1 << 64) + 1, 1 << 100, 2)])
        .unwrap();
    let json = serde_json::to_string(&map).unwrap();
    let restored: WideRangeMap = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
    assert_eq!(restored.get((1 << 64) + 500), Some(2));
}

#[rstest]
fn test_empty_map_roundtrip() {
    let map = NarrowRangeMap::new();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, "[]");
    let restored: NarrowRangeMap = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_rejects_out_of_order_ranges() {
    let result: Result<NarrowRangeMap, _> = serde_json::from_str("[[100,200,3],[15,18,4]]");
    let error = result.unwrap_err();
    assert!(
        error
            .to_string()
            .contains("range 15-18 isn't greater than previous max range 100-200")
    );
}

#[rstest]
fn test_deserialize_rejects_negative_keys() {
    let result: Result<NarrowRangeMap, _> = serde_json::from_str("[[-1,5,0]]");
    assert!(result.is_err());
}
