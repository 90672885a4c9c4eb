//! Address-to-geolocation table over both key widths.
//!
//! Ranges ending inside the 32-bit space go to a [`NarrowRangeMap`], all
//! others to a [`WideRangeMap`]. Lookups pick the map the same way from the
//! numeric value of the address, so an IPv6 address such as `::1` consults
//! the 32-bit map.

use std::net::IpAddr;

use super::GeoError;
use super::IpInfo;
use super::IpRangeRecord;
use crate::range_map::{NarrowRangeMap, WideRangeMap};

/// Geolocation lookup table keyed by IP address.
///
/// # Examples
///
/// ```rust
/// use rangemaps::geo::{IpInfo, IpInfoMap, LatitudeLongitude};
/// use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
///
/// let mut map = IpInfoMap::new();
/// let info = IpInfo::new("US", LatitudeLongitude::new(37.751, -97.822)).unwrap();
/// map.insert(0x0808_0000, 0x0808_FFFF, info).unwrap();
///
/// let found = map.get(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))).unwrap();
/// assert_eq!(found.country(), "US");
/// assert!(map.get(IpAddr::V6(Ipv6Addr::LOCALHOST)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpInfoMap {
    narrow: NarrowRangeMap,
    wide: WideRangeMap,
}

impl IpInfoMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from rows split into fields, in ascending address
    /// order per key width, and trims it.
    ///
    /// Rows without coordinates are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Record`] naming the zero-based index of the first
    /// row that fails to parse or is out of order.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        let mut skipped = 0_usize;
        for (index, row) in rows.into_iter().enumerate() {
            if !map.insert_row(index, row.as_ref())? {
                skipped += 1;
            }
        }
        map.finish_load(skipped);
        Ok(map)
    }

    /// Parses and stores one row, returning `false` if it was skipped for
    /// lacking coordinates.
    pub(crate) fn insert_row<S: AsRef<str>>(
        &mut self,
        index: usize,
        fields: &[S],
    ) -> Result<bool, GeoError> {
        let loaded = IpRangeRecord::from_fields(fields)
            .and_then(|record| record.map(|record| self.insert_record(record)).transpose());
        match loaded {
            Ok(Some(())) => Ok(true),
            Ok(None) => {
                tracing::trace!(index, "skipped row without coordinates");
                Ok(false)
            }
            Err(error) => Err(GeoError::Record {
                index,
                source: Box::new(error),
            }),
        }
    }

    pub(crate) fn finish_load(&mut self, skipped: usize) {
        self.trim_to_size();
        tracing::debug!(
            narrow = self.narrow.len(),
            wide = self.wide.len(),
            skipped,
            "loaded ip info map"
        );
    }

    /// Builds a table from parsed records and trims it.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Record`] for the first out-of-order record.
    pub fn from_records<I>(records: I) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = IpRangeRecord>,
    {
        let mut map = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            map.insert_record(record)
                .map_err(|error| GeoError::Record {
                    index,
                    source: Box::new(error),
                })?;
        }
        map.trim_to_size();
        Ok(map)
    }

    /// Stores `info` for the addresses `start..=end`, given as unsigned
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NarrowOrdering`] or [`GeoError::WideOrdering`]
    /// when the range does not follow the previous one of the same width.
    pub fn insert(&mut self, start: u128, end: u128, info: IpInfo) -> Result<(), GeoError> {
        let value = info.to_packed();
        match (u32::try_from(start), u32::try_from(end)) {
            (Ok(start), Ok(end)) => self.narrow.put(start, end, value)?,
            _ => self.wide.put(start, end, value)?,
        }
        Ok(())
    }

    /// Stores a parsed record.
    ///
    /// # Errors
    ///
    /// See [`insert`](Self::insert).
    pub fn insert_record(&mut self, record: IpRangeRecord) -> Result<(), GeoError> {
        self.insert(record.start, record.end, record.info)
    }

    /// Returns the geolocation of `address`.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are looked up as the
    /// IPv4 address they carry.
    #[must_use]
    pub fn get(&self, address: IpAddr) -> Option<IpInfo> {
        let key = match address.to_canonical() {
            IpAddr::V4(address) => u128::from(u32::from(address)),
            IpAddr::V6(address) => u128::from(address),
        };
        self.get_by_number(key)
    }

    /// Returns the geolocation of the address with numeric value `key`.
    #[must_use]
    pub fn get_by_number(&self, key: u128) -> Option<IpInfo> {
        match u32::try_from(key) {
            Ok(key) => self.narrow.get(key),
            Err(_) => self.wide.get(key),
        }
        .map(IpInfo::from_packed)
    }

    /// Returns the total number of stored ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.narrow.len() + self.wide.len()
    }

    /// Returns `true` if no range has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.narrow.is_empty() && self.wide.is_empty()
    }

    /// Returns the table of ranges within the 32-bit address space.
    #[must_use]
    pub const fn narrow(&self) -> &NarrowRangeMap {
        &self.narrow
    }

    /// Returns the table of ranges beyond the 32-bit address space.
    #[must_use]
    pub const fn wide(&self) -> &WideRangeMap {
        &self.wide
    }

    /// Shrinks both tables to fit their contents.
    pub fn trim_to_size(&mut self) {
        self.narrow.trim_to_size();
        self.wide.trim_to_size();
    }
}
