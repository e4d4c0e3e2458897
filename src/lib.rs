//! Geocode ID - short, location-coded identifiers
//!
//! This crate turns a geographic coordinate into a short, human-writable
//! identifier such as `82FM8-GPU`: a five-character geohash prefix naming
//! where the thing was registered, and a shuffled-looking suffix drawn from a
//! per-prefix counter.
//!
//! # Features
//!
//! - **Short**: every prefix is exactly five characters; suffixes are three or four
//! - **Human-writable**: the alphabet leaves out `I`, `L` and `O`, and typed
//!   input is forgiven by [`normalize_geohash`]
//! - **Region-aware**: coordinates inside a reference region get finer cells;
//!   everything else is flagged with `W` and encoded against the whole globe
//! - **Non-sequential**: consecutive counters map to unrelated suffixes through
//!   a reversible multiply-and-XOR transform
//! - **Collision-free**: uniqueness is delegated to an [`AtomicCounter`]
//!
//! # Quick Start
//!
//! ```
//! use geocode_id::{encode_geohash, decode_geohash, normalize_geohash, encode_suffix, decode_suffix};
//!
//! // Encode a coordinate
//! let prefix = encode_geohash(37.7749, -122.4194)?;
//! assert_eq!(prefix, "82FM8");
//!
//! // Outside the reference region the hash carries the global flag
//! let london = encode_geohash(51.5074, -0.1278)?;
//! assert!(london.starts_with('W'));
//! let cell = decode_geohash(&london)?;
//! assert!(cell.contains(51.5074, -0.1278));
//!
//! // Obfuscate a counter and get it back
//! let suffix = encode_suffix(42)?;
//! assert_eq!(decode_suffix(&suffix)?, 42);
//!
//! // Forgive hand-typed codes
//! assert_eq!(normalize_geohash("82fm8-gpu"), "82FM8GPU");
//! # Ok::<(), geocode_id::GeoIdError>(())
//! ```
//!
//! # Identifier Layout
//!
//! | Part      | Length | Description |
//! |-----------|--------|-------------|
//! | prefix    | 5      | Regional geohash, or `W` + 4-symbol global geohash |
//! | separator | 0 or 1 | `-` by default |
//! | suffix    | 3 or 4 | Obfuscated counter (15-bit or 20-bit domain) |
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, GeoIdError>`. Nothing is clamped
//! or defaulted: out-of-range coordinates, negative or overflowing counters
//! and counter failures are all reported to the caller.

// Re-export geohash functions
pub use geohash::{decode_geohash, encode_geohash, normalize_geohash, GeoHashCodec};
pub use geohash::{in_cell, matches_code, neighbor, neighbors, Direction};

// Re-export identifier functions
pub use ident::{decode_suffix, encode_suffix, generate_identifier};
pub use ident::{AtomicCounter, Identifier, IdentifierComposer, InMemoryCounter};

// Re-export public types
pub use alphabet::{ALPHABET, GLOBAL_FLAG};
pub use config::IdentifierConfig;
pub use error::{CounterError, GeoIdError};
pub use types::{AxisRange, Bounds, Coordinate, DecodedGeoHash, Regime};

// Module declarations
pub mod alphabet;
pub mod config;
pub mod error;
pub mod geohash;
pub mod ident;
pub mod types;
