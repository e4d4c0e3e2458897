//! Error types for geohash encoding, suffix obfuscation and identifier composition.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or composing identifiers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoIdError {
    /// Latitude or longitude is outside the valid range, or not a finite number.
    #[error("Invalid coordinate: latitude {latitude} must be in [-90, 90] and longitude {longitude} in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A character that is not part of the 32-symbol alphabet.
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The counter is negative.
    #[error("Invalid counter {0}: counters must be non-negative")]
    InvalidCounter(i64),

    /// The counter no longer fits the largest supported suffix domain.
    #[error("Counter {0} exceeds the largest supported suffix domain (1048576 values)")]
    CounterOverflow(i64),

    /// A suffix that the sequence encoder can never produce.
    #[error("Invalid suffix: {0}")]
    InvalidSuffix(String),

    /// An identifier that cannot be split into prefix and suffix.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A reference region that is empty, inverted or outside the globe.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// A configuration value other than the region is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The counter collaborator failed while generating an identifier.
    #[error("Identifier generation failed for prefix {key}")]
    IdentifierGenerationFailed {
        key: String,
        #[source]
        source: CounterError,
    },
}

/// Errors reported by an [`AtomicCounter`](crate::AtomicCounter) implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CounterError {
    /// The backing store rejected or failed the increment.
    #[error("Counter backend error: {0}")]
    Backend(String),

    /// The increment did not complete within the allotted time.
    #[error("Counter increment timed out after {0:?}")]
    Timeout(Duration),
}
