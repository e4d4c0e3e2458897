//! Obfuscated counter suffixes.
//!
//! A counter is mapped through `v = (counter * PRIME) mod 2^bits`, then
//! `v ^= MASK`, and written as fixed-width base-32. Multiplication by an odd
//! number is a permutation modulo a power of two and XOR with a fixed mask is
//! its own inverse, so each regime is a bijection on its domain and
//! consecutive counters come out looking unrelated.
//!
//! | Counters              | Domain | Symbols |
//! |-----------------------|--------|---------|
//! | `0 ..= 32767`         | 15-bit | 3       |
//! | `32768 ..= 1048575`   | 20-bit | 4       |
//!
//! Anything larger is rejected with [`GeoIdError::CounterOverflow`].

use crate::alphabet::{from_base32, to_base32};
use crate::error::GeoIdError;

/// Multiplier for the 15-bit regime. Must be odd.
pub const PRIME_15: u64 = 20219;
/// XOR mask for the 15-bit regime. Must fit in 15 bits.
pub const XOR_15: u64 = 14325;
/// Size of the 15-bit domain.
pub const MODULUS_15: u64 = 1 << 15;

/// Multiplier for the 20-bit regime. Must be odd.
pub const PRIME_20: u64 = 486187;
/// XOR mask for the 20-bit regime. Must fit in 20 bits.
pub const XOR_20: u64 = 786433;
/// Size of the 20-bit domain.
pub const MODULUS_20: u64 = 1 << 20;

const _: () = assert!(PRIME_15 % 2 == 1 && PRIME_15 < MODULUS_15);
const _: () = assert!(XOR_15 < MODULUS_15);
const _: () = assert!(PRIME_20 % 2 == 1 && PRIME_20 < MODULUS_20);
const _: () = assert!(XOR_20 < MODULUS_20);

const INVERSE_15: u64 = inverse_mod_pow2(PRIME_15, MODULUS_15);
const INVERSE_20: u64 = inverse_mod_pow2(PRIME_20, MODULUS_20);

/// Multiplicative inverse of an odd `prime` modulo the power of two `modulus`.
///
/// Newton iteration: `x = p` is correct to 3 bits for odd `p`, and each step
/// doubles the number of correct bits; five steps are plenty for 20 bits.
const fn inverse_mod_pow2(prime: u64, modulus: u64) -> u64 {
    let mut x = prime;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2u64.wrapping_sub(prime.wrapping_mul(x)));
        i += 1;
    }
    x & (modulus - 1)
}

/// One suffix regime: domain size, constants and output width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRegime {
    /// Size of the domain, a power of two.
    pub modulus: u64,
    /// Odd multiplier applied on the way in.
    pub prime: u64,
    /// Inverse of `prime` modulo `modulus`.
    pub inverse: u64,
    /// XOR mask, below `modulus`.
    pub mask: u64,
    /// Symbols in an encoded suffix.
    pub width: usize,
}

/// Three symbols for counters below 32768.
pub const REGIME_15: SuffixRegime = SuffixRegime {
    modulus: MODULUS_15,
    prime: PRIME_15,
    inverse: INVERSE_15,
    mask: XOR_15,
    width: 3,
};

/// Four symbols for counters below 1048576.
pub const REGIME_20: SuffixRegime = SuffixRegime {
    modulus: MODULUS_20,
    prime: PRIME_20,
    inverse: INVERSE_20,
    mask: XOR_20,
    width: 4,
};

impl SuffixRegime {
    /// Forward transform. Only the low bits of `value` inside the domain are
    /// used, so the result is always below `modulus`.
    pub fn scramble(&self, value: u64) -> u64 {
        ((self.reduce(value) * self.prime) & (self.modulus - 1)) ^ self.mask
    }

    /// Inverse of [`scramble`](Self::scramble), reducing `value` the same way.
    pub fn unscramble(&self, value: u64) -> u64 {
        (self.reduce(value ^ self.mask) * self.inverse) & (self.modulus - 1)
    }

    // Both factors stay below 2^20, so the products fit comfortably in a u64.
    fn reduce(&self, value: u64) -> u64 {
        value & (self.modulus - 1)
    }
}

/// Pick the regime for a counter.
fn regime_for(counter: i64) -> Result<&'static SuffixRegime, GeoIdError> {
    if counter < 0 {
        return Err(GeoIdError::InvalidCounter(counter));
    }
    match counter as u64 {
        c if c < MODULUS_15 => Ok(&REGIME_15),
        c if c < MODULUS_20 => Ok(&REGIME_20),
        _ => Err(GeoIdError::CounterOverflow(counter)),
    }
}

/// Encode a counter as an obfuscated fixed-width suffix.
///
/// # Arguments
///
/// * `counter` - Value handed out by the counter for one prefix
///
/// # Returns
///
/// Three symbols for counters below 32768, four below 1048576.
///
/// # Errors
///
/// - [`GeoIdError::InvalidCounter`] for negative counters
/// - [`GeoIdError::CounterOverflow`] for counters of 1048576 or more
///
/// # Examples
///
/// ```
/// use geocode_id::{decode_suffix, encode_suffix};
///
/// let suffix = encode_suffix(42)?;
/// assert_eq!(suffix.len(), 3);
/// assert_eq!(decode_suffix(&suffix)?, 42);
///
/// assert_eq!(encode_suffix(32768)?.len(), 4);
/// assert!(encode_suffix(-1).is_err());
/// # Ok::<(), geocode_id::GeoIdError>(())
/// ```
pub fn encode_suffix(counter: i64) -> Result<String, GeoIdError> {
    let regime = regime_for(counter)?;
    Ok(to_base32(regime.scramble(counter as u64), regime.width))
}

/// Recover the counter behind a suffix produced by [`encode_suffix`].
///
/// # Errors
///
/// - [`GeoIdError::InvalidSymbol`] for characters outside the alphabet
/// - [`GeoIdError::InvalidSuffix`] for a length other than 3 or 4, or for a
///   4-symbol suffix that maps below 32768 (the encoder never produces one)
pub fn decode_suffix(suffix: &str) -> Result<i64, GeoIdError> {
    let regime = match suffix.chars().count() {
        3 => &REGIME_15,
        4 => &REGIME_20,
        n => {
            return Err(GeoIdError::InvalidSuffix(format!(
                "{:?} has {} symbols, expected 3 or 4",
                suffix, n
            )))
        }
    };

    let counter = regime.unscramble(from_base32(suffix, 0)?);

    if regime.width == REGIME_20.width && counter < MODULUS_15 {
        return Err(GeoIdError::InvalidSuffix(format!(
            "{:?} decodes to {}, which is encoded with 3 symbols",
            suffix, counter
        )));
    }

    Ok(counter as i64)
}
