//! # rangemaps
//!
//! Compact, append-only lookup tables from disjoint inclusive integer ranges
//! to `i32` values.
//!
//! ## Overview
//!
//! - **Range maps**: [`NarrowRangeMap`](range_map::NarrowRangeMap) for `u32`
//!   keys and [`WideRangeMap`](range_map::WideRangeMap) for `u128` keys,
//!   built by strictly increasing insertion and queried by binary search
//! - **Geolocation**: [`IpInfoMap`](geo::IpInfoMap), an IP address table
//!   storing packed country and coordinates in both maps
//!
//! ## Feature Flags
//!
//! - `range_map`: Range maps (default)
//! - `geo`: IP geolocation table (default)
//! - `loader`: CSV and gzip readers for geolocation tables (default)
//! - `serde`: `Serialize`/`Deserialize` for the range maps
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rangemaps::prelude::*;
//!
//! let mut map = NarrowRangeMap::new();
//! map.put(10, 20, 1).unwrap();
//! map.put(25, 30, 2).unwrap();
//! map.trim_to_size();
//!
//! assert_eq!(map.get(15), Some(1));
//! assert_eq!(map.get(21), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rangemaps::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "range_map")]
    pub use crate::range_map::*;

    #[cfg(feature = "geo")]
    pub use crate::geo::*;
}

#[cfg(feature = "range_map")]
pub mod range_map;

#[cfg(feature = "geo")]
pub mod geo;
