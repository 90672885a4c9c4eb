//! Append-only map from disjoint inclusive ranges to `i32` values.
//!
//! # Storage
//!
//! Boundaries live in one flat word vector, interleaved as
//! `[start0, end0, start1, end1, ...]`, with values in a parallel vector.
//! No per-entry record is materialized until a caller asks for one.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `put`          | O(1) amortized     |
//! | `get`          | O(log n)           |
//! | `len`          | O(1)               |
//! | `trim_to_size` | O(n)               |
//! | `iter`         | O(n) traversal     |

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use super::OrderingViolation;
use super::RangeKey;
use super::boundary::find_enclosing;

/// Number of entries preallocated by [`RangeMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A single stored range and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeEntry<K> {
    /// First key of the range (inclusive).
    pub start: K,
    /// Last key of the range (inclusive).
    pub end: K,
    /// Value attached to every key in the range.
    pub value: i32,
}

impl<K: Copy> RangeEntry<K> {
    /// Returns the keys covered by this entry.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> RangeInclusive<K> {
        RangeInclusive::new(self.start, self.end)
    }
}

/// An ordered, append-only map from disjoint inclusive key ranges to `i32`.
///
/// Ranges must be inserted in strictly increasing order: each new range has
/// to start after the end of the previous one. Lookups are a binary search
/// over all stored boundaries.
///
/// Use the width-specific aliases [`NarrowRangeMap`](super::NarrowRangeMap)
/// (`u32` keys) and [`WideRangeMap`](super::WideRangeMap) (`u128` keys).
///
/// # Examples
///
/// ```rust
/// use rangemaps::range_map::NarrowRangeMap;
///
/// let mut map = NarrowRangeMap::new();
/// map.put(10, 20, 1).unwrap();
/// map.put(25, 30, 2).unwrap();
///
/// assert_eq!(map.get(20), Some(1));
/// assert_eq!(map.get(21), None);
/// assert_eq!(map.get(25), Some(2));
///
/// // Out-of-order insertion is rejected and leaves the map untouched
/// assert!(map.put(15, 18, 4).is_err());
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct RangeMap<K: RangeKey> {
    boundaries: Vec<K::Word>,
    values: Vec<i32>,
}

impl<K: RangeKey> RangeMap<K> {
    const WORDS_PER_ENTRY: usize = K::WORDS_PER_BOUNDARY * 2;

    /// Creates an empty map with room for [`DEFAULT_CAPACITY`] entries.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with room for `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangemaps::range_map::WideRangeMap;
    ///
    /// let map = WideRangeMap::with_capacity(1024);
    /// assert!(map.capacity() >= 1024);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if the storage for `capacity`
    /// entries exceeds `isize::MAX` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let words = capacity
            .checked_mul(Self::WORDS_PER_ENTRY)
            .unwrap_or(usize::MAX);
        Self {
            boundaries: Vec::with_capacity(words),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Builds a map from entries already sorted in strictly increasing order.
    ///
    /// # Errors
    ///
    /// Returns the first [`OrderingViolation`] encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangemaps::range_map::NarrowRangeMap;
    ///
    /// let map = NarrowRangeMap::from_sorted_entries([(5, 10, 8), (15, 20, 32)]).unwrap();
    /// assert_eq!(map.get(17), Some(32));
    ///
    /// let result = NarrowRangeMap::from_sorted_entries([(15, 20, 32), (5, 10, 8)]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_sorted_entries<I>(entries: I) -> Result<Self, OrderingViolation<K>>
    where
        I: IntoIterator<Item = (K, K, i32)>,
    {
        let entries = entries.into_iter();
        let mut map = Self::with_capacity(entries.size_hint().0.max(DEFAULT_CAPACITY));
        map.try_extend(entries)?;
        Ok(map)
    }

    /// Returns the number of stored ranges.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no range has been stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of entries the map can hold without growing.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Appends the range `start..=end` mapped to `value`.
    ///
    /// `start <= end` is not checked. A reversed range is stored as given
    /// and lookups near it give unspecified results.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingViolation`] if the map is not empty and `start` is
    /// not strictly greater than the end of the last stored range. Nothing
    /// is written in that case.
    pub fn put(&mut self, start: K, end: K, value: i32) -> Result<(), OrderingViolation<K>> {
        if let Some(previous) = self.last()
            && previous.end.compare_unsigned(start) != Ordering::Less
        {
            tracing::trace!(%start, %end, previous_end = %previous.end, "rejected out-of-order range");
            return Err(OrderingViolation {
                start,
                end,
                previous_start: previous.start,
                previous_end: previous.end,
            });
        }
        if self.values.len() == self.values.capacity() {
            self.grow();
        }
        start.push_words(&mut self.boundaries);
        end.push_words(&mut self.boundaries);
        self.values.push(value);
        Ok(())
    }

    /// Appends every entry in order, stopping at the first violation.
    ///
    /// Entries accepted before the violation stay in the map.
    ///
    /// # Errors
    ///
    /// Returns the first [`OrderingViolation`] encountered.
    pub fn try_extend<I>(&mut self, entries: I) -> Result<(), OrderingViolation<K>>
    where
        I: IntoIterator<Item = (K, K, i32)>,
    {
        for (start, end, value) in entries {
            self.put(start, end, value)?;
        }
        Ok(())
    }

    /// Returns the value of the range containing `key`.
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
    /// assert_eq!(map.get((1 << 64) + 500), Some(2));
    /// assert_eq!(map.get((1 << 100) + 1), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: K) -> Option<i32> {
        self.position(key).map(|index| self.values[index])
    }

    /// Returns the whole entry whose range contains `key`.
    #[must_use]
    pub fn get_entry(&self, key: K) -> Option<RangeEntry<K>> {
        self.position(key).map(|index| self.entry_at(index))
    }

    /// Returns `true` if some range contains `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: K) -> bool {
        self.position(key).is_some()
    }

    /// Returns the entry with the lowest range.
    #[must_use]
    pub fn first(&self) -> Option<RangeEntry<K>> {
        (!self.is_empty()).then(|| self.entry_at(0))
    }

    /// Returns the most recently inserted entry.
    #[must_use]
    pub fn last(&self) -> Option<RangeEntry<K>> {
        self.len().checked_sub(1).map(|index| self.entry_at(index))
    }

    /// Returns an iterator over the entries in ascending order.
    #[inline]
    pub fn iter(&self) -> RangeMapIterator<'_, K> {
        RangeMapIterator {
            map: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Shrinks the backing storage to exactly [`len`](Self::len) entries.
    ///
    /// Calling it again, or on an already exact map, does nothing.
    pub fn trim_to_size(&mut self) {
        if self.values.len() == self.values.capacity() {
            return;
        }
        self.boundaries.shrink_to_fit();
        self.values.shrink_to_fit();
        tracing::debug!(entries = self.len(), "trimmed range map storage");
    }

    fn grow(&mut self) {
        let additional = (self.values.capacity() >> 1).max(1);
        self.values.reserve_exact(additional);
        self.boundaries.reserve_exact(additional * Self::WORDS_PER_ENTRY);
        tracing::trace!(capacity = self.values.capacity(), "grew range map storage");
    }

    #[inline]
    fn position(&self, key: K) -> Option<usize> {
        find_enclosing(self.len() * 2, |index| {
            K::compare_stored(self.boundary_words(index), key)
        })
    }

    #[inline]
    fn boundary_words(&self, index: usize) -> &[K::Word] {
        let offset = index * K::WORDS_PER_BOUNDARY;
        &self.boundaries[offset..offset + K::WORDS_PER_BOUNDARY]
    }

    fn entry_at(&self, index: usize) -> RangeEntry<K> {
        RangeEntry {
            start: K::from_words(self.boundary_words(index * 2)),
            end: K::from_words(self.boundary_words(index * 2 + 1)),
            value: self.values[index],
        }
    }
}

impl<K: RangeKey> Default for RangeMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RangeKey> PartialEq for RangeMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: RangeKey> Eq for RangeMap<K> {}

impl<K: RangeKey> fmt::Debug for RangeMap<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.iter().map(|entry| (entry.range(), entry.value)))
            .finish()
    }
}

impl<K: RangeKey> fmt::Display for RangeMap<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, entry) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{}-{}: {}", entry.start, entry.end, entry.value)?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over the entries of a [`RangeMap`], in ascending order.
pub struct RangeMapIterator<'a, K: RangeKey> {
    map: &'a RangeMap<K>,
    front: usize,
    back: usize,
}

impl<K: RangeKey> Iterator for RangeMapIterator<'_, K> {
    type Item = RangeEntry<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let entry = self.map.entry_at(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<K: RangeKey> DoubleEndedIterator for RangeMapIterator<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.map.entry_at(self.back))
    }
}

impl<K: RangeKey> ExactSizeIterator for RangeMapIterator<'_, K> {}

impl<K: RangeKey> FusedIterator for RangeMapIterator<'_, K> {}

impl<'a, K: RangeKey> IntoIterator for &'a RangeMap<K> {
    type Item = RangeEntry<K>;
    type IntoIter = RangeMapIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K> serde::Serialize for RangeMap<K>
where
    K: RangeKey + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            seq.serialize_element(&(entry.start, entry.end, entry.value))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct RangeMapVisitor<K> {
    marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<K> RangeMapVisitor<K> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for RangeMapVisitor<K>
where
    K: RangeKey + serde::Deserialize<'de>,
{
    type Value = RangeMap<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of (start, end, value) ranges in ascending order")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut map = RangeMap::with_capacity(capacity);
        while let Some((start, end, value)) = seq.next_element::<(K, K, i32)>()? {
            map.put(start, end, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        map.trim_to_size();
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for RangeMap<K>
where
    K: RangeKey + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RangeMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
