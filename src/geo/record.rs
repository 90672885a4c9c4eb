//! Parsing of geolocation rows.
//!
//! Rows follow the numeric city layout published for the GeoLite2 city
//! database, with addresses given as unsigned decimal integers:
//!
//! ```text
//! start,end,country,state1,state2,city,postcode,latitude,longitude,timezone
//! ```
//!
//! Splitting a line into fields is left to the caller's CSV reader.

use super::GeoError;
use super::IpInfo;
use super::LatitudeLongitude;

const START_FIELD: usize = 0;
const END_FIELD: usize = 1;
const COUNTRY_FIELD: usize = 2;
const LATITUDE_FIELD: usize = 7;
const LONGITUDE_FIELD: usize = 8;

/// One address range and its geolocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IpRangeRecord {
    /// First address of the range, as an unsigned integer.
    pub start: u128,
    /// Last address of the range, as an unsigned integer.
    pub end: u128,
    /// Geolocation of the range.
    pub info: IpInfo,
}

impl IpRangeRecord {
    /// Parses a row already split into fields.
    ///
    /// Returns `Ok(None)` for rows without coordinates, which the source data
    /// contains for some ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if a required field is missing or malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangemaps::geo::IpRangeRecord;
    ///
    /// let fields = ["16777216", "16777471", "AU", "Queensland", "", "South Brisbane", "", "-27.4767", "153.017", ""];
    /// let record = IpRangeRecord::from_fields(&fields).unwrap().unwrap();
    /// assert_eq!(record.start, 16_777_216);
    /// assert_eq!(record.info.country(), "AU");
    ///
    /// let without_coordinates = ["0", "255", "US", "", "", "", "", "", "", ""];
    /// assert_eq!(IpRangeRecord::from_fields(&without_coordinates), Ok(None));
    /// ```
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Option<Self>, GeoError> {
        let field = move |index: usize| {
            fields
                .get(index)
                .map(AsRef::<str>::as_ref)
                .ok_or(GeoError::MissingField { index })
        };

        let latitude = field(LATITUDE_FIELD)?;
        let longitude = field(LONGITUDE_FIELD)?;
        if latitude.is_empty() || longitude.is_empty() {
            return Ok(None);
        }

        let start = field(START_FIELD)?
            .parse::<u128>()
            .map_err(GeoError::InvalidAddress)?;
        let end = field(END_FIELD)?
            .parse::<u128>()
            .map_err(GeoError::InvalidAddress)?;
        let location = LatitudeLongitude::new(
            latitude
                .parse::<f64>()
                .map_err(GeoError::InvalidCoordinate)?,
            longitude
                .parse::<f64>()
                .map_err(GeoError::InvalidCoordinate)?,
        );
        let info = IpInfo::new(field(COUNTRY_FIELD)?, location)?;

        Ok(Some(Self { start, end, info }))
    }
}
