//! Range map keyed by unsigned 128-bit integers.
//!
//! Each boundary is kept as a `(high, low)` pair of `u64` words, so an entry
//! costs four words of key storage. Stored boundaries are compared word by
//! word and only rebuilt into a `u128` when an entry is handed out.

use std::cmp::Ordering;

use super::RangeKey;
use super::RangeMap;

/// Range map over `u128` keys, two storage words per boundary.
///
/// # Examples
///
/// ```rust
/// use rangemaps::range_map::WideRangeMap;
///
/// let mut map = WideRangeMap::new();
/// map.put(0, 1 << 64, 1).unwrap();
/// map.put((1 << 64) + 1, 1 << 100, 2).unwrap();
///
/// assert_eq!(map.get(1 << 64), Some(1));
/// assert_eq!(map.get((1 << 100) + 1), None);
/// ```
pub type WideRangeMap = RangeMap<u128>;

/// Splits `value` into its high and low 64-bit halves.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn split_words(value: u128) -> (u64, u64) {
    ((value >> 64) as u64, value as u64)
}

#[inline]
const fn join_words(high: u64, low: u64) -> u128 {
    ((high as u128) << 64) | low as u128
}

#[inline]
fn compare_words(left: (u64, u64), right: (u64, u64)) -> Ordering {
    left.0.cmp(&right.0).then(left.1.cmp(&right.1))
}

impl RangeKey for u128 {
    type Word = u64;

    const WORDS_PER_BOUNDARY: usize = 2;

    #[inline]
    fn push_words(self, words: &mut Vec<Self::Word>) {
        let (high, low) = split_words(self);
        words.push(high);
        words.push(low);
    }

    #[inline]
    fn from_words(words: &[Self::Word]) -> Self {
        join_words(words[0], words[1])
    }

    #[inline]
    fn compare_unsigned(self, other: Self) -> Ordering {
        compare_words(split_words(self), split_words(other))
    }

    #[inline]
    fn compare_stored(stored: &[Self::Word], key: Self) -> Ordering {
        compare_words((stored[0], stored[1]), split_words(key))
    }
}

static_assertions::assert_impl_all!(WideRangeMap: Send, Sync, Clone);
