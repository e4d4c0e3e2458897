//! Adjacent-cell lookup.
//!
//! A hash of `n` symbols is `5n` interleaved bits: even bits (counting from
//! the most significant) index longitude, odd bits index latitude. Moving to a
//! neighbor means stepping one of those two indices and interleaving again.

use crate::alphabet::{from_base32, to_base32, BITS_PER_SYMBOL, GLOBAL_FLAG};
use crate::error::GeoIdError;
use crate::geohash::decoder::split_flag;

/// Longest hash body whose bits fit in a `u64`.
const MAX_SYMBOLS: usize = 12;

/// Compass direction of a neighboring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Find the same-precision cell adjacent to `hash` in `direction`.
///
/// Global-regime hashes wrap around the antimeridian. Stepping past a pole,
/// or past the edge of the reference region for a regional hash, yields `None`.
///
/// # Examples
///
/// ```
/// use geocode_id::{neighbor, Direction};
///
/// assert_eq!(neighbor("00000", Direction::East)?, Some("00001".to_string()));
/// assert_eq!(neighbor("00000", Direction::West)?, None);
/// assert_eq!(neighbor("W0000", Direction::South)?, None);
/// # Ok::<(), geocode_id::GeoIdError>(())
/// ```
pub fn neighbor(hash: &str, direction: Direction) -> Result<Option<String>, GeoIdError> {
    let (flagged, body, offset) = split_flag(hash);
    let symbols = body.chars().count();

    if symbols > MAX_SYMBOLS {
        return Err(GeoIdError::InvalidIdentifier(format!(
            "geohash {} is longer than {} symbols",
            hash, MAX_SYMBOLS
        )));
    }
    if symbols == 0 {
        return Ok(None);
    }

    let value = from_base32(body, offset)?;
    let total_bits = symbols as u32 * BITS_PER_SYMBOL;
    let lon_bits = (total_bits + 1) / 2;
    let lat_bits = total_bits / 2;
    let (mut lon, mut lat) = deinterleave(value, total_bits);

    match direction {
        Direction::North => {
            if lat + 1 >= 1u64 << lat_bits {
                return Ok(None);
            }
            lat += 1;
        }
        Direction::South => {
            if lat == 0 {
                return Ok(None);
            }
            lat -= 1;
        }
        Direction::East => {
            let columns = 1u64 << lon_bits;
            if lon + 1 == columns && !flagged {
                return Ok(None);
            }
            lon = (lon + 1) % columns;
        }
        Direction::West => {
            let columns = 1u64 << lon_bits;
            if lon == 0 && !flagged {
                return Ok(None);
            }
            lon = (lon + columns - 1) % columns;
        }
    }

    let mut result = String::with_capacity(hash.len());
    if flagged {
        result.push(GLOBAL_FLAG);
    }
    result.push_str(&to_base32(interleave(lon, lat, total_bits), symbols));
    Ok(Some(result))
}

/// All eight surrounding cells, clockwise from north. Missing cells are `None`.
pub fn neighbors(hash: &str) -> Result<[Option<String>; 8], GeoIdError> {
    let north = neighbor(hash, Direction::North)?;
    let south = neighbor(hash, Direction::South)?;
    let east = neighbor(hash, Direction::East)?;
    let west = neighbor(hash, Direction::West)?;

    let step = |cell: &Option<String>, direction| -> Result<Option<String>, GeoIdError> {
        match cell {
            Some(cell) => neighbor(cell, direction),
            None => Ok(None),
        }
    };

    Ok([
        north.clone(),
        step(&north, Direction::East)?,
        east.clone(),
        step(&south, Direction::East)?,
        south.clone(),
        step(&south, Direction::West)?,
        west.clone(),
        step(&north, Direction::West)?,
    ])
}

fn deinterleave(value: u64, total_bits: u32) -> (u64, u64) {
    let mut lon = 0u64;
    let mut lat = 0u64;
    for i in 0..total_bits {
        let bit = (value >> (total_bits - 1 - i)) & 1;
        if i % 2 == 0 {
            lon = (lon << 1) | bit;
        } else {
            lat = (lat << 1) | bit;
        }
    }
    (lon, lat)
}

fn interleave(lon: u64, lat: u64, total_bits: u32) -> u64 {
    let mut lon_left = (total_bits + 1) / 2;
    let mut lat_left = total_bits / 2;
    let mut value = 0u64;
    for i in 0..total_bits {
        let bit = if i % 2 == 0 {
            lon_left -= 1;
            (lon >> lon_left) & 1
        } else {
            lat_left -= 1;
            (lat >> lat_left) & 1
        };
        value = (value << 1) | bit;
    }
    value
}
