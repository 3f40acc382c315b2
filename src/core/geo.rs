use crate::core::constants::MERCATOR_MAX_LATITUDE;
use serde::{Deserialize, Serialize};

/// A geographic coordinate, longitude first.
///
/// Serialized as a `[longitude, latitude]` pair, the order GeoJSON and the
/// projection layer use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Creates a new coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the square Mercator world
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE)
    }

    /// (λ, φ) in radians
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lng.to_radians(), self.lat.to_radians())
    }

    /// Plain coordinate average; callers handle antimeridian spans themselves.
    pub fn midpoint(&self, other: &LngLat) -> LngLat {
        LngLat::new((self.lng + other.lng) / 2.0, (self.lat + other.lat) / 2.0)
    }
}

impl Default for LngLat {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(coord: LngLat) -> Self {
        [coord.lng, coord.lat]
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<geo_types::Coord<f64>> for LngLat {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<geo_types::Point<f64>> for LngLat {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

/// Represents a point in planar (projected or screen) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_serializes_as_pair() {
        let coord = LngLat::new(-74.006, 40.7128);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[-74.006,40.7128]");

        let back: LngLat = serde_json::from_str("[139.6917, 35.6895]").unwrap();
        assert_eq!(back, LngLat::new(139.6917, 35.6895));
    }

    #[test]
    fn test_wrap_and_clamp() {
        assert_eq!(LngLat::wrap_lng(190.0), -170.0);
        assert_eq!(LngLat::wrap_lng(-190.0), 170.0);
        assert_eq!(LngLat::clamp_lat(90.0), MERCATOR_MAX_LATITUDE);
        assert!(!LngLat::new(0.0, 91.0).is_valid());
    }

    #[test]
    fn test_point_math() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.midpoint(&b), Point::new(1.5, 2.0));
        assert_eq!(b.subtract(&a).multiply(2.0), Point::new(6.0, 8.0));
    }
}
