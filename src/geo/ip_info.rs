//! Country and coordinates packed into a single `i32`.
//!
//! # Layout
//!
//! ```text
//!  31                 21 20                 10 9        5 4        0
//! +---------------------+---------------------+----------+----------+
//! |  latitude (11 bit)  | longitude (11 bit)  | letter 0 | letter 1 |
//! +---------------------+---------------------+----------+----------+
//! ```
//!
//! Coordinates are fixed point: `(degrees + 180) / 360 * 2048`, truncated.
//! Letters are stored as `letter - 'A'`.

use super::GeoError;
use super::LatitudeLongitude;

const FIXED_11_SHIFT: u32 = 11;
const FIXED_11_MAGNITUDE: f64 = (1_u32 << FIXED_11_SHIFT) as f64;
const FIXED_11_MASK: u32 = (1 << FIXED_11_SHIFT) - 1;
const COUNTRY_CHAR_BASE: u8 = b'A';
const COUNTRY_CHAR_SHIFT: u32 = 5;
const COUNTRY_CHAR_MASK: u32 = (1 << COUNTRY_CHAR_SHIFT) - 1;
const LOCATION_SHIFT: u32 = COUNTRY_CHAR_SHIFT * 2;
const COUNTRY_MASK: u32 = (1 << LOCATION_SHIFT) - 1;

/// Geolocation attached to an address range.
///
/// # Examples
///
/// ```rust
/// use rangemaps::geo::{IpInfo, LatitudeLongitude};
///
/// let info = IpInfo::new("JP", LatitudeLongitude::new(35.68, 139.69)).unwrap();
/// let unpacked = IpInfo::from_packed(info.to_packed());
///
/// assert_eq!(unpacked.country(), "JP");
/// assert!((unpacked.location.latitude - 35.68).abs() < 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IpInfo {
    country: [u8; 2],
    /// Approximate position of the range.
    pub location: LatitudeLongitude,
}

impl IpInfo {
    /// Creates an `IpInfo` for an alpha-2 country code such as `"US"`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCountry`] unless `country` is exactly two
    /// ASCII uppercase letters.
    pub fn new(country: &str, location: LatitudeLongitude) -> Result<Self, GeoError> {
        match country.as_bytes() {
            &[first, second] if first.is_ascii_uppercase() && second.is_ascii_uppercase() => {
                Ok(Self {
                    country: [first, second],
                    location,
                })
            }
            _ => Err(GeoError::InvalidCountry(country.to_string())),
        }
    }

    /// Returns the alpha-2 country code.
    #[must_use]
    pub fn country(&self) -> &str {
        std::str::from_utf8(&self.country).unwrap_or_default()
    }

    /// Packs the country and a quantized location into an `i32`.
    #[must_use]
    pub fn to_packed(&self) -> i32 {
        let location = (degrees_to_fixed11(self.location.latitude) << FIXED_11_SHIFT)
            | degrees_to_fixed11(self.location.longitude);
        let country = (u32::from(self.country[0] - COUNTRY_CHAR_BASE) << COUNTRY_CHAR_SHIFT)
            | u32::from(self.country[1] - COUNTRY_CHAR_BASE);
        ((location << LOCATION_SHIFT) | country).cast_signed()
    }

    /// Unpacks a value produced by [`to_packed`](Self::to_packed).
    ///
    /// The location comes back quantized to 360/2048 of a degree.
    ///
    /// Any `i32` is accepted. Letter fields holding 26..=31 decode to the
    /// ASCII characters after `'Z'` (`'['` to `` '`' ``), so a value not
    /// produced by `to_packed` can yield a country that [`new`](Self::new)
    /// would reject.
    #[must_use]
    pub fn from_packed(packed: i32) -> Self {
        let bits = packed.cast_unsigned();
        let location = bits >> LOCATION_SHIFT;
        let country = bits & COUNTRY_MASK;
        Self {
            country: [
                letter((country >> COUNTRY_CHAR_SHIFT) & COUNTRY_CHAR_MASK),
                letter(country & COUNTRY_CHAR_MASK),
            ],
            location: LatitudeLongitude::new(
                fixed11_to_degrees((location >> FIXED_11_SHIFT) & FIXED_11_MASK),
                fixed11_to_degrees(location & FIXED_11_MASK),
            ),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn letter(bits: u32) -> u8 {
    bits as u8 + COUNTRY_CHAR_BASE
}

fn fixed11_to_degrees(fixed: u32) -> f64 {
    f64::from(fixed) * 360.0 / FIXED_11_MAGNITUDE - 180.0
}

// +180 longitude lands on 2048, which does not fit in 11 bits
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn degrees_to_fixed11(degrees: f64) -> u32 {
    (((degrees + 180.0) / 360.0 * FIXED_11_MAGNITUDE) as u32).min(FIXED_11_MASK)
}
