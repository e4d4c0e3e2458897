//! Geohash encoding.
//!
//! This module provides the region-aware encoder: coordinates inside the
//! reference region get five symbols of regional precision, everything else
//! gets the global flag followed by four symbols against the whole globe.

use crate::alphabet::{symbol_for, GLOBAL_FLAG, SYMBOL_BITS};
use crate::error::GeoIdError;
use crate::types::{Bounds, Coordinate, DecodedGeoHash, Regime};

/// Symbols in a regional hash.
pub const REGIONAL_SYMBOLS: usize = 5;

/// Symbols after the flag in a global hash.
pub const GLOBAL_SYMBOLS: usize = 4;

/// Total length of every hash, in either regime.
pub const HASH_LENGTH: usize = 5;

/// Region-aware geohash codec.
///
/// The reference region is configuration; [`GeoHashCodec::default`] uses
/// [`Bounds::CONTINENTAL_US`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoHashCodec {
    region: Bounds,
}

impl GeoHashCodec {
    /// Create a codec for the given reference region.
    pub fn new(region: Bounds) -> Result<Self, GeoIdError> {
        region.validate()?;
        Ok(Self { region })
    }

    /// The reference region.
    pub fn region(&self) -> Bounds {
        self.region
    }

    /// Which regime a coordinate falls into. Region edges count as inside.
    pub fn regime(&self, coordinate: &Coordinate) -> Regime {
        if self.region.contains(coordinate.latitude, coordinate.longitude) {
            Regime::Regional
        } else {
            Regime::Global
        }
    }

    /// Encode a latitude/longitude pair.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees in `[-90, 90]`
    /// * `longitude` - Degrees in `[-180, 180]`
    ///
    /// # Returns
    ///
    /// A five-character hash: regional symbols, or `W` and four global symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GeoIdError::InvalidCoordinate`] when either value is out of
    /// range or not finite. Values are never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocode_id::GeoHashCodec;
    ///
    /// let codec = GeoHashCodec::default();
    /// let san_francisco = codec.encode(37.7749, -122.4194)?;
    /// assert_eq!(san_francisco.len(), 5);
    /// assert!(!san_francisco.starts_with('W'));
    ///
    /// let london = codec.encode(51.5074, -0.1278)?;
    /// assert!(london.starts_with('W'));
    /// # Ok::<(), geocode_id::GeoIdError>(())
    /// ```
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<String, GeoIdError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        Ok(self.encode_coordinate(&coordinate))
    }

    /// Encode an already validated coordinate.
    pub fn encode_coordinate(&self, coordinate: &Coordinate) -> String {
        match self.regime(coordinate) {
            Regime::Regional => bisect(coordinate, &self.region, REGIONAL_SYMBOLS),
            Regime::Global => {
                let mut hash = String::with_capacity(HASH_LENGTH);
                hash.push(GLOBAL_FLAG);
                hash.push_str(&bisect(coordinate, &Bounds::GLOBAL, GLOBAL_SYMBOLS));
                hash
            }
        }
    }

    /// Decode a hash against the global bounds.
    ///
    /// See [`decode_geohash`](crate::decode_geohash) for the precision caveat
    /// on regional hashes.
    pub fn decode(&self, hash: &str) -> Result<DecodedGeoHash, GeoIdError> {
        super::decoder::decode_geohash(hash)
    }

    /// Decode a hash against the bounds it was encoded with.
    pub fn decode_exact(&self, hash: &str) -> Result<DecodedGeoHash, GeoIdError> {
        super::decoder::decode_in_region(hash, &self.region)
    }
}

impl Default for GeoHashCodec {
    fn default() -> Self {
        Self {
            region: Bounds::CONTINENTAL_US,
        }
    }
}

/// Encode a latitude/longitude pair using the default reference region.
///
/// # Examples
///
/// ```
/// use geocode_id::encode_geohash;
///
/// assert_eq!(encode_geohash(24.0, -125.0)?, "00000");
/// assert!(encode_geohash(23.99, -125.0)?.starts_with('W'));
/// assert!(encode_geohash(91.0, 0.0).is_err());
/// # Ok::<(), geocode_id::GeoIdError>(())
/// ```
pub fn encode_geohash(latitude: f64, longitude: f64) -> Result<String, GeoIdError> {
    GeoHashCodec::default().encode(latitude, longitude)
}

/// Bisect `bounds` around the coordinate, emitting `symbols` symbols.
///
/// Bits alternate longitude/latitude starting with longitude and continue
/// alternating across symbol boundaries. A value strictly above the midpoint
/// takes the upper half.
pub(crate) fn bisect(coordinate: &Coordinate, bounds: &Bounds, symbols: usize) -> String {
    let mut lat = [bounds.min_lat, bounds.max_lat];
    let mut lon = [bounds.min_lon, bounds.max_lon];
    let mut is_lon = true;
    let mut hash = String::with_capacity(symbols);

    for _ in 0..symbols {
        let mut value = 0u8;
        for mask in SYMBOL_BITS {
            let (interval, target) = if is_lon {
                (&mut lon, coordinate.longitude)
            } else {
                (&mut lat, coordinate.latitude)
            };
            let mid = (interval[0] + interval[1]) / 2.0;
            if target > mid {
                value |= mask;
                interval[0] = mid;
            } else {
                interval[1] = mid;
            }
            is_lon = !is_lon;
        }
        hash.push(symbol_for(value));
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_encoding() {
        let hash = encode_geohash(37.7749, -122.4194).unwrap();
        assert_eq!(hash, "82FM8");
        assert_eq!(hash.len(), HASH_LENGTH);
    }

    #[test]
    fn test_global_encoding() {
        assert_eq!(encode_geohash(51.5074, -0.1278).unwrap(), "WFBNU");
        assert_eq!(encode_geohash(-33.8688, 151.2093).unwrap(), "WQ3FX");
    }

    #[test]
    fn test_region_corners() {
        assert_eq!(encode_geohash(24.0, -125.0).unwrap(), "00000");
        assert_eq!(encode_geohash(50.0, -65.0).unwrap(), "ZZZZZ");
        assert_eq!(encode_geohash(23.99, -125.0).unwrap(), "W9GQ0");
    }

    #[test]
    fn test_globe_corners() {
        assert_eq!(encode_geohash(-90.0, -180.0).unwrap(), "W0000");
        assert_eq!(encode_geohash(90.0, 180.0).unwrap(), "WZZZZ");
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (lat, lon) in [(91.0, 0.0), (-90.5, 0.0), (0.0, -181.0), (0.0, 180.5), (f64::NAN, 0.0)] {
            assert!(
                matches!(encode_geohash(lat, lon), Err(GeoIdError::InvalidCoordinate { .. })),
                "({}, {}) should be rejected",
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_custom_region() {
        let europe = Bounds::new(35.0, 70.0, -10.0, 40.0).unwrap();
        let codec = GeoHashCodec::new(europe).unwrap();

        let london = codec.encode(51.5074, -0.1278).unwrap();
        assert!(!london.starts_with(GLOBAL_FLAG));
        assert_eq!(codec.regime(&Coordinate::new(51.5074, -0.1278).unwrap()), Regime::Regional);

        let san_francisco = codec.encode(37.7749, -122.4194).unwrap();
        assert!(san_francisco.starts_with(GLOBAL_FLAG));
    }

    #[test]
    fn test_codec_decoders() {
        let codec = GeoHashCodec::default();
        let hash = codec.encode(37.7749, -122.4194).unwrap();

        assert!(codec.decode_exact(&hash).unwrap().contains(37.7749, -122.4194));
        // Against global bounds the regional symbols land elsewhere.
        assert!(!codec.decode(&hash).unwrap().contains(37.7749, -122.4194));
    }

    #[test]
    fn test_invalid_region_rejected() {
        let inverted = Bounds {
            min_lat: 50.0,
            max_lat: 24.0,
            min_lon: -125.0,
            max_lon: -65.0,
        };
        assert!(GeoHashCodec::new(inverted).is_err());
    }
}
