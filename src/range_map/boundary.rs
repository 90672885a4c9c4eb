//! Lookup over the interleaved boundary sequence.
//!
//! A map with `n` entries exposes `2n` boundaries laid out as
//! `[start0, end0, start1, end1, ...]`. Because ranges are disjoint and
//! sorted, this sequence is sorted as well, and the parity of a search
//! position tells whether a key falls inside a range or in a gap:
//!
//! ```text
//!   index:    0        1        2        3
//!           start0    end0    start1    end1
//!   gap  ][  entry 0  ][   gap   ][  entry 1  ][  gap
//!    ins=0     ins=1      ins=2      ins=3      ins=4
//! ```
//!
//! An exact boundary hit is always contained. Otherwise an odd insertion
//! point lies between a start and its end, and an even one lies in a gap.

use std::cmp::Ordering;

/// Returns the index of the entry enclosing the searched key, if any.
///
/// `compare(index)` must return the ordering of boundary `index` relative to
/// the searched key, using unsigned comparison.
#[inline]
pub(crate) fn find_enclosing<F>(boundary_count: usize, compare: F) -> Option<usize>
where
    F: FnMut(usize) -> Ordering,
{
    match search(boundary_count, compare) {
        Ok(index) => Some(index >> 1),
        Err(insertion) if insertion & 1 == 1 => Some(insertion >> 1),
        Err(_) => None,
    }
}

/// Binary search over `0..boundary_count`.
///
/// Returns `Ok(index)` on an exact hit, `Err(insertion_point)` otherwise.
fn search<F>(boundary_count: usize, mut compare: F) -> Result<usize, usize>
where
    F: FnMut(usize) -> Ordering,
{
    let mut low = 0;
    let mut high = boundary_count;
    while low < high {
        let middle = low + (high - low) / 2;
        match compare(middle) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(middle),
        }
    }
    Err(low)
}
