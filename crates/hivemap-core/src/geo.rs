//! Geographic value types and great-circle distance.
//!
//! Distances use the haversine formula on a spherical Earth — accurate to
//! well under 0.5% at directory scale, which is far below the precision a
//! "beekeepers near you" listing needs.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
///
/// Invariant: latitude in [-90, 90], longitude in [-180, 180]. Build one
/// through [`GeoPoint::new`]; values that arrive via deserialization must
/// be re-checked with [`GeoPoint::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a validated point.
    ///
    /// # Errors
    ///
    /// Returns `GeoError` if either coordinate is non-finite or outside
    /// its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Re-assert the coordinate invariant.
    ///
    /// Serde constructs points field-by-field, bypassing [`GeoPoint::new`],
    /// so anything that accepts deserialized input calls this first.
    ///
    /// # Errors
    ///
    /// Returns `GeoError` naming the offending coordinate.
    pub fn validate(self) -> Result<(), GeoError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::LatitudeOutOfRange(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

/// Great-circle distance between two points, in kilometers.
///
/// Symmetric up to floating-point rounding; equal points yield exactly 0
/// (both squared-sine terms vanish). Valid inputs keep the haversine term
/// inside [0, 1], so no clamping is needed.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
