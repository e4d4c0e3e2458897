//! Region-aware geohash codec.
//!
//! This module contains the geohash operations:
//! - Encoding coordinates to regional or flagged global hashes
//! - Decoding hashes back to cells
//! - Normalizing and matching hand-typed codes
//! - Adjacent-cell lookup

pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod neighbors;
pub mod normalizer;

// Re-export main functionality
pub use decoder::{decode_geohash, decode_in_region};
pub use encoder::{encode_geohash, GeoHashCodec, GLOBAL_SYMBOLS, HASH_LENGTH, REGIONAL_SYMBOLS};
pub use matcher::{in_cell, matches_code};
pub use neighbors::{neighbor, neighbors, Direction};
pub use normalizer::normalize_geohash;
