//! Loading geolocation tables from CSV, plain or gzip-compressed.
//!
//! City names and regions may contain quoted commas, so rows go through a
//! real CSV reader before reaching
//! [`IpRangeRecord::from_fields`](super::IpRangeRecord::from_fields).

use std::io::Read;

use flate2::read::GzDecoder;

use super::GeoError;
use super::IpInfoMap;

/// Errors raised while reading a geolocation CSV stream.
#[derive(Debug)]
pub enum LoadError {
    /// The stream could not be read or is not valid CSV (or gzip).
    Csv(csv::Error),
    /// A row could not be stored.
    Geo(GeoError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(error) => write!(formatter, "failed to read csv: {error}"),
            Self::Geo(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(error) => Some(error),
            Self::Geo(error) => Some(error),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        Self::Csv(error)
    }
}

impl From<GeoError> for LoadError {
    fn from(error: GeoError) -> Self {
        Self::Geo(error)
    }
}

impl IpInfoMap {
    /// Builds a table from headerless CSV rows in the numeric GeoLite2 city
    /// layout, and trims it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Csv`] if the stream is unreadable and
    /// [`LoadError::Geo`] for the first row that fails to load.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangemaps::geo::IpInfoMap;
    ///
    /// let data = "16777216,16777471,AU,Queensland,,\"Brisbane, South\",,-27.4767,153.017,\n";
    /// let map = IpInfoMap::from_csv_reader(data.as_bytes()).unwrap();
    /// assert_eq!(map.get("1.0.0.9".parse().unwrap()).unwrap().country(), "AU");
    /// ```
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut map = Self::new();
        map.extend_from_csv_reader(reader)?;
        Ok(map)
    }

    /// Like [`from_csv_reader`](Self::from_csv_reader) for gzip-compressed
    /// input, as the GeoLite2 city files are published.
    ///
    /// # Errors
    ///
    /// See [`from_csv_reader`](Self::from_csv_reader); corrupt gzip data is
    /// reported as [`LoadError::Csv`].
    pub fn from_gzip_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Self::from_csv_reader(GzDecoder::new(reader))
    }

    /// Appends the rows of another CSV stream, then trims the table.
    ///
    /// Used to combine the separate IPv4 and IPv6 files into one table.
    ///
    /// # Errors
    ///
    /// See [`from_csv_reader`](Self::from_csv_reader).
    pub fn extend_from_csv_reader<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut skipped = 0_usize;
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();
            if !self.insert_row(index, fields.as_slice())? {
                skipped += 1;
            }
        }
        self.finish_load(skipped);
        Ok(())
    }
}
