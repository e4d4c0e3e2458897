//! Core data structures for geohash encoding and decoding.

use serde::{Deserialize, Serialize};

use crate::error::GeoIdError;

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    ///
    /// Values are never clamped: `Coordinate::new(90.5, 0.0)` is an error,
    /// not the north pole.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoIdError> {
        if Bounds::GLOBAL.contains(latitude, longitude) {
            Ok(Self { latitude, longitude })
        } else {
            Err(GeoIdError::InvalidCoordinate { latitude, longitude })
        }
    }
}

/// A latitude/longitude rectangle, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Southern edge, in degrees.
    pub min_lat: f64,
    /// Northern edge, in degrees.
    pub max_lat: f64,
    /// Western edge, in degrees.
    pub min_lon: f64,
    /// Eastern edge, in degrees.
    pub max_lon: f64,
}

impl Bounds {
    /// The whole globe.
    pub const GLOBAL: Bounds = Bounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lon: -180.0,
        max_lon: 180.0,
    };

    /// Default reference region: a box around the contiguous United States.
    pub const CONTINENTAL_US: Bounds = Bounds {
        min_lat: 24.0,
        max_lat: 50.0,
        min_lon: -125.0,
        max_lon: -65.0,
    };

    /// Create bounds, checking that they describe a non-empty rectangle on the globe.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, GeoIdError> {
        let bounds = Self { min_lat, max_lat, min_lon, max_lon };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that the rectangle is non-empty and lies inside the global bounds.
    pub fn validate(&self) -> Result<(), GeoIdError> {
        if !(self.min_lat < self.max_lat && self.min_lon < self.max_lon) {
            return Err(GeoIdError::InvalidRegion(format!(
                "empty or inverted bounds lat [{}, {}] lon [{}, {}]",
                self.min_lat, self.max_lat, self.min_lon, self.max_lon
            )));
        }

        if !(Bounds::GLOBAL.contains(self.min_lat, self.min_lon)
            && Bounds::GLOBAL.contains(self.max_lat, self.max_lon))
        {
            return Err(GeoIdError::InvalidRegion(format!(
                "bounds lat [{}, {}] lon [{}, {}] extend beyond the globe",
                self.min_lat, self.max_lat, self.min_lon, self.max_lon
            )));
        }

        Ok(())
    }

    /// Inclusive containment test. NaN is never contained.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lon
            && longitude <= self.max_lon
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::CONTINENTAL_US
    }
}

/// Which bisection bounds a geohash was encoded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Five symbols against the reference region.
    Regional,
    /// Flag character followed by four symbols against the whole globe.
    Global,
}

/// One axis of a decoded geohash cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower edge of the cell on this axis.
    pub min: f64,
    /// Upper edge of the cell on this axis.
    pub max: f64,
    /// Midpoint of `min` and `max`; the best estimate on this axis.
    pub mid: f64,
}

impl AxisRange {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self { min, max, mid: (min + max) / 2.0 }
    }

    /// Half the width of the range: the maximum error of `mid`.
    pub fn error(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Range as `[min, max, mid]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.min, self.max, self.mid]
    }
}

/// The cell a geohash describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedGeoHash {
    /// Latitude extent, in degrees.
    pub latitude: AxisRange,
    /// Longitude extent, in degrees.
    pub longitude: AxisRange,
}

impl DecodedGeoHash {
    /// Center of the cell.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.mid,
            longitude: self.longitude.mid,
        }
    }

    /// Whether the cell (inclusive) contains the given point.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.latitude.min
            && latitude <= self.latitude.max
            && longitude >= self.longitude.min
            && longitude <= self.longitude.max
    }
}
