//! IP geolocation on top of the range maps.
//!
//! Each address range carries an [`IpInfo`] (country and approximate
//! coordinates) packed into the `i32` value slot of a range map. IPv4-sized
//! ranges live in a [`NarrowRangeMap`](crate::range_map::NarrowRangeMap),
//! the rest in a [`WideRangeMap`](crate::range_map::WideRangeMap).
//!
//! With the `loader` feature, tables can be read straight from the CSV
//! (optionally gzip-compressed) GeoLite2 city files with
//! [`IpInfoMap::from_csv_reader`] and [`IpInfoMap::from_gzip_csv_reader`].
//!
//! # Examples
//!
//! ```rust
//! use rangemaps::geo::IpInfoMap;
//! use std::net::IpAddr;
//!
//! let rows = [
//!     ["16777216", "16777471", "AU", "", "", "", "", "-27.4767", "153.017", ""],
//!     ["16777472", "16778239", "CN", "", "", "", "", "26.0614", "119.3061", ""],
//! ];
//! let map = IpInfoMap::from_rows(rows).unwrap();
//!
//! let address: IpAddr = "1.0.0.1".parse().unwrap();
//! assert_eq!(map.get(address).unwrap().country(), "AU");
//! ```

mod error;
mod ip_info;
mod ip_info_map;
#[cfg(feature = "loader")]
mod loader;
mod location;
mod record;

pub use error::GeoError;
pub use ip_info::IpInfo;
pub use ip_info_map::IpInfoMap;
#[cfg(feature = "loader")]
pub use loader::LoadError;
pub use location::LatitudeLongitude;
pub use record::IpRangeRecord;
