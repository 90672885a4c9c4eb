//! Key widths supported by [`RangeMap`](super::RangeMap).
//!
//! Boundaries are never stored as their native integer type. Each key width
//! decides how a boundary is split into storage words and how a stored
//! boundary is compared against the key being looked up. Every comparison
//! is unsigned.

use std::cmp::Ordering;
use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u128 {}
}

/// An unsigned key width usable as a range boundary.
///
/// This trait is sealed: it is implemented for `u32` (see
/// [`NarrowRangeMap`](super::NarrowRangeMap)) and `u128` (see
/// [`WideRangeMap`](super::WideRangeMap)) only.
pub trait RangeKey: Copy + Eq + fmt::Debug + fmt::Display + sealed::Sealed {
    /// The storage word a boundary is split into.
    type Word: Copy + fmt::Debug + Send + Sync + 'static;

    /// Number of storage words per boundary.
    const WORDS_PER_BOUNDARY: usize;

    /// Appends the storage words of `self` to `words`.
    fn push_words(self, words: &mut Vec<Self::Word>);

    /// Rebuilds a key from exactly [`Self::WORDS_PER_BOUNDARY`] words.
    fn from_words(words: &[Self::Word]) -> Self;

    /// Unsigned three-way comparison of two keys.
    fn compare_unsigned(self, other: Self) -> Ordering;

    /// Compares a stored boundary against `key` without rebuilding the
    /// boundary when the width allows it.
    #[inline]
    fn compare_stored(stored: &[Self::Word], key: Self) -> Ordering {
        Self::from_words(stored).compare_unsigned(key)
    }
}
