//! Shared geospatial types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic reference point in WGS84 degrees.
///
/// Used as the fixed center the coverage circle is drawn around; the core
/// never computes site placement, only radius-of-coverage around this point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (positive north)
    pub lat_deg: f64,
    /// Longitude in degrees (positive east)
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Creates a new reference point from latitude and longitude in degrees.
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat_deg, self.lon_deg)
    }
}
