//! Error types for the geolocation table.

use std::num::{ParseFloatError, ParseIntError};

use crate::range_map::OrderingViolation;

/// Errors raised while building an [`IpInfoMap`](super::IpInfoMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The country is not a two-letter uppercase alpha-2 code.
    InvalidCountry(String),
    /// A row has fewer fields than required.
    MissingField {
        /// Index of the first absent field.
        index: usize,
    },
    /// A range boundary is not an unsigned decimal integer.
    InvalidAddress(ParseIntError),
    /// A latitude or longitude is not a decimal number.
    InvalidCoordinate(ParseFloatError),
    /// An IPv4-sized range was inserted out of order.
    NarrowOrdering(OrderingViolation<u32>),
    /// A range beyond the IPv4 space was inserted out of order.
    WideOrdering(OrderingViolation<u128>),
    /// A row failed to load.
    Record {
        /// Zero-based row index.
        index: usize,
        /// Why the row failed.
        source: Box<GeoError>,
    },
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCountry(country) => {
                write!(formatter, "country must be an alpha-2 country code, was {country:?}")
            }
            Self::MissingField { index } => write!(formatter, "missing field {index}"),
            Self::InvalidAddress(error) => write!(formatter, "invalid address: {error}"),
            Self::InvalidCoordinate(error) => write!(formatter, "invalid coordinate: {error}"),
            Self::NarrowOrdering(error) => write!(formatter, "{error}"),
            Self::WideOrdering(error) => write!(formatter, "{error}"),
            Self::Record { index, source } => {
                write!(formatter, "failed to load record {index}: {source}")
            }
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddress(error) => Some(error),
            Self::InvalidCoordinate(error) => Some(error),
            Self::NarrowOrdering(error) => Some(error),
            Self::WideOrdering(error) => Some(error),
            Self::Record { source, .. } => Some(source.as_ref()),
            Self::InvalidCountry(_) | Self::MissingField { .. } => None,
        }
    }
}

impl From<OrderingViolation<u32>> for GeoError {
    fn from(error: OrderingViolation<u32>) -> Self {
        Self::NarrowOrdering(error)
    }
}

impl From<OrderingViolation<u128>> for GeoError {
    fn from(error: OrderingViolation<u128>) -> Self {
        Self::WideOrdering(error)
    }
}
