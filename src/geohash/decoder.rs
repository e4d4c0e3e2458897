//! Geohash decoding.
//!
//! This module reverses the alternating bisection performed by the encoder.

use crate::alphabet::{value_of, GLOBAL_FLAG, SYMBOL_BITS};
use crate::error::GeoIdError;
use crate::types::{AxisRange, Bounds, DecodedGeoHash};

/// Decode a geohash against the global bounds.
///
/// A leading flag character is skipped, so global-regime hashes decode
/// exactly. Regional hashes carry no flag and were bisected against the
/// reference region, so decoding them here yields a cell somewhere else on
/// the globe: it is an approximation, not the encoded location. Use
/// [`GeoHashCodec::decode_exact`](crate::GeoHashCodec::decode_exact) when the
/// region is known.
///
/// Input is case-sensitive. An empty hash decodes to the whole globe.
///
/// # Errors
///
/// Returns [`GeoIdError::InvalidSymbol`] for any character outside the alphabet.
///
/// # Examples
///
/// ```
/// use geocode_id::{decode_geohash, encode_geohash};
///
/// let hash = encode_geohash(51.5074, -0.1278)?;
/// let decoded = decode_geohash(&hash)?;
/// assert!(decoded.contains(51.5074, -0.1278));
/// # Ok::<(), geocode_id::GeoIdError>(())
/// ```
pub fn decode_geohash(hash: &str) -> Result<DecodedGeoHash, GeoIdError> {
    let (_, body, offset) = split_flag(hash);
    refine(body, &Bounds::GLOBAL, offset)
}

/// Decode a geohash against the bounds it was encoded with: the global bounds
/// when flagged, `region` otherwise.
pub fn decode_in_region(hash: &str, region: &Bounds) -> Result<DecodedGeoHash, GeoIdError> {
    let (flagged, body, offset) = split_flag(hash);
    let bounds = if flagged { &Bounds::GLOBAL } else { region };
    refine(body, bounds, offset)
}

/// Split off a leading flag character. Returns whether it was present, the
/// remaining symbols, and their offset in `hash`.
pub(crate) fn split_flag(hash: &str) -> (bool, &str, usize) {
    match hash.strip_prefix(GLOBAL_FLAG) {
        Some(body) => (true, body, GLOBAL_FLAG.len_utf8()),
        None => (false, hash, 0),
    }
}

fn refine(symbols: &str, bounds: &Bounds, offset: usize) -> Result<DecodedGeoHash, GeoIdError> {
    let mut lat = [bounds.min_lat, bounds.max_lat];
    let mut lon = [bounds.min_lon, bounds.max_lon];
    let mut is_lon = true;

    for (position, symbol) in symbols.chars().enumerate() {
        let value = value_of(symbol).ok_or(GeoIdError::InvalidSymbol {
            symbol,
            position: position + offset,
        })?;

        for mask in SYMBOL_BITS {
            let interval = if is_lon { &mut lon } else { &mut lat };
            let mid = (interval[0] + interval[1]) / 2.0;
            if value & mask != 0 {
                interval[0] = mid;
            } else {
                interval[1] = mid;
            }
            is_lon = !is_lon;
        }
    }

    Ok(DecodedGeoHash {
        latitude: AxisRange::new(lat[0], lat[1]),
        longitude: AxisRange::new(lon[0], lon[1]),
    })
}
