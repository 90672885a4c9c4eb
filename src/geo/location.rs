//! Geographic coordinates.

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeLongitude {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub longitude: f64,
}

impl LatitudeLongitude {
    /// Creates a coordinate pair.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the great-circle distance to `other` as a central angle in
    /// radians. Multiply by a sphere radius to get a length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangemaps::geo::LatitudeLongitude;
    ///
    /// let north_pole = LatitudeLongitude::new(90.0, 0.0);
    /// let south_pole = LatitudeLongitude::new(-90.0, 0.0);
    /// let angle = north_pole.haversine_distance(&south_pole);
    /// assert!((angle - std::f64::consts::PI).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn haversine_distance(&self, other: &Self) -> f64 {
        let latitude1 = self.latitude.to_radians();
        let longitude1 = self.longitude.to_radians();
        let latitude2 = other.latitude.to_radians();
        let longitude2 = other.longitude.to_radians();

        let a = ((latitude2 - latitude1) / 2.0).sin().powi(2)
            + latitude1.cos() * latitude2.cos() * ((longitude2 - longitude1) / 2.0).sin().powi(2);

        2.0 * a.sqrt().min(1.0).asin()
    }
}
