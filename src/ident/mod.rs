//! Identifier issuing.
//!
//! This module contains:
//! - The obfuscated counter suffix encoder and its inverse
//! - The atomic counter collaborator trait and an in-memory implementation
//! - The composer that joins a geohash prefix with a counter suffix

pub mod composer;
pub mod counter;
pub mod identifier;
pub mod suffix;

// Re-export main functionality
pub use composer::{generate_identifier, IdentifierComposer};
pub use counter::{AtomicCounter, InMemoryCounter};
pub use identifier::{Identifier, DEFAULT_SEPARATOR};
pub use suffix::{decode_suffix, encode_suffix, SuffixRegime, REGIME_15, REGIME_20};
