//! Append-only range-to-value lookup tables.
//!
//! This module provides ordered maps from disjoint inclusive key ranges to
//! `i32` values, built once by sequential insertion and then queried by
//! point lookup:
//!
//! - [`NarrowRangeMap`]: `u32` keys
//! - [`WideRangeMap`]: `u128` keys, stored as pairs of `u64` words
//!
//! Both are aliases of the generic [`RangeMap`], whose key width is chosen
//! through the sealed [`RangeKey`] trait.
//!
//! # Examples
//!
//! ```rust
//! use rangemaps::range_map::{NarrowRangeMap, WideRangeMap};
//!
//! let mut narrow = NarrowRangeMap::new();
//! narrow.put(5, 10, 8).unwrap();
//! narrow.put(15, 20, 32).unwrap();
//! narrow.trim_to_size();
//!
//! assert_eq!(narrow.get(4), None);
//! assert_eq!(narrow.get(7), Some(8));
//! assert_eq!(narrow.get(12), None);
//! assert_eq!(narrow.get(20), Some(32));
//!
//! let mut wide = WideRangeMap::new();
//! wide.put(u128::from(u64::MAX), u128::MAX, 1).unwrap();
//! assert_eq!(wide.get(u128::MAX), Some(1));
//! ```

mod boundary;
mod error;
mod key;
mod map;
mod narrow;
mod wide;

pub use error::OrderingViolation;
pub use key::RangeKey;
pub use map::DEFAULT_CAPACITY;
pub use map::RangeEntry;
pub use map::RangeMap;
pub use map::RangeMapIterator;
pub use narrow::NarrowRangeMap;
pub use wide::WideRangeMap;
