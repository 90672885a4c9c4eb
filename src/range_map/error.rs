//! Error type for range map insertion.

use super::RangeKey;

/// Returned by [`RangeMap::put`](super::RangeMap::put) when a range does not
/// start strictly after the end of the previously inserted range.
///
/// The rejected range is never stored; the map is left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use rangemaps::range_map::NarrowRangeMap;
///
/// let mut map = NarrowRangeMap::new();
/// map.put(100, 200, 3).unwrap();
///
/// let error = map.put(15, 18, 4).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "range 15-18 isn't greater than previous max range 100-200"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingViolation<K: RangeKey> {
    /// Start of the rejected range.
    pub start: K,
    /// End of the rejected range.
    pub end: K,
    /// Start of the last range in the map.
    pub previous_start: K,
    /// End of the last range in the map.
    pub previous_end: K,
}

impl<K: RangeKey> std::fmt::Display for OrderingViolation<K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "range {}-{} isn't greater than previous max range {}-{}",
            self.start, self.end, self.previous_start, self.previous_end
        )
    }
}

impl<K: RangeKey> std::error::Error for OrderingViolation<K> {}
