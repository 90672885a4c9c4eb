//! Range map keyed by unsigned 32-bit integers.

use std::cmp::Ordering;

use super::RangeKey;
use super::RangeMap;

/// Range map over `u32` keys, one storage word per boundary.
///
/// # Examples
///
/// ```rust
/// use rangemaps::range_map::NarrowRangeMap;
///
/// let mut map = NarrowRangeMap::new();
/// map.put(10, 20, 1).unwrap();
/// map.put(25, 30, 2).unwrap();
/// map.put(100, 200, 3).unwrap();
///
/// assert_eq!(map.get(15), Some(1));
/// assert_eq!(map.get(99), None);
/// assert_eq!(map.get(150), Some(3));
/// ```
pub type NarrowRangeMap = RangeMap<u32>;

impl RangeKey for u32 {
    type Word = Self;

    const WORDS_PER_BOUNDARY: usize = 1;

    #[inline]
    fn push_words(self, words: &mut Vec<Self::Word>) {
        words.push(self);
    }

    #[inline]
    fn from_words(words: &[Self::Word]) -> Self {
        words[0]
    }

    #[inline]
    fn compare_unsigned(self, other: Self) -> Ordering {
        self.cmp(&other)
    }

    #[inline]
    fn compare_stored(stored: &[Self::Word], key: Self) -> Ordering {
        stored[0].cmp(&key)
    }
}

static_assertions::assert_impl_all!(NarrowRangeMap: Send, Sync, Clone);
