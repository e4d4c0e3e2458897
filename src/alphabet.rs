//! The 32-symbol alphabet shared by geohash prefixes and counter suffixes.
//!
//! Symbols are `0-9A-HJKMNP-Z` without `W`. `I`, `L` and `O` are left out
//! because they are easily confused with `1` and `0` when written by hand.
//! `W` is left out because it is reserved as the global-regime flag, so no
//! symbol produced by an encoder can ever be mistaken for the flag.

use crate::error::GeoIdError;

/// Symbol table, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTUVXYZ";

/// Marker prepended to hashes encoded against the global bounds.
pub const GLOBAL_FLAG: char = 'W';

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Bit masks for one symbol, most significant first.
pub(crate) const SYMBOL_BITS: [u8; 5] = [16, 8, 4, 2, 1];

const INVALID: u8 = 0xFF;

const fn build_reverse_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static REVERSE: [u8; 128] = build_reverse_table();

/// Map a 5-bit value to its symbol.
pub fn symbol_for(value: u8) -> char {
    ALPHABET[(value & 0x1F) as usize] as char
}

/// Map a symbol back to its 5-bit value, or `None` if it is not in the alphabet.
///
/// Lookup is case-sensitive; run input through
/// [`normalize_geohash`](crate::normalize_geohash) first when it was typed by a person.
pub fn value_of(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match REVERSE[symbol as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Encode `value` as exactly `width` symbols, most significant first, zero-padded.
///
/// Bits above `width * 5` are discarded; callers keep values inside their domain.
pub fn to_base32(mut value: u64, width: usize) -> String {
    let mut symbols = vec!['0'; width];
    for slot in symbols.iter_mut().rev() {
        *slot = symbol_for((value & 0x1F) as u8);
        value >>= BITS_PER_SYMBOL;
    }
    symbols.into_iter().collect()
}

/// Parse a string of symbols, most significant first.
///
/// `offset` is added to reported error positions so callers parsing a slice
/// of a larger code can report positions in the original string.
pub fn from_base32(text: &str, offset: usize) -> Result<u64, GeoIdError> {
    let mut value = 0u64;
    for (position, symbol) in text.chars().enumerate() {
        let digit = value_of(symbol).ok_or(GeoIdError::InvalidSymbol {
            symbol,
            position: position + offset,
        })?;
        value = (value << BITS_PER_SYMBOL) | u64::from(digit);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.len(), 32);

        let mut sorted = ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 32, "alphabet must not repeat symbols");

        for excluded in ['I', 'L', 'O', GLOBAL_FLAG] {
            assert_eq!(value_of(excluded), None, "{} must not be a symbol", excluded);
        }
    }

    #[test]
    fn test_symbol_lookup_is_inverse() {
        for value in 0..32u8 {
            assert_eq!(value_of(symbol_for(value)), Some(value));
        }
        assert_eq!(value_of('a'), None);
        assert_eq!(value_of('-'), None);
        assert_eq!(value_of('é'), None);
    }

    #[test]
    fn test_base32_padding() {
        assert_eq!(to_base32(0, 3), "000");
        assert_eq!(to_base32(31, 3), "00Z");
        assert_eq!(to_base32(32, 3), "010");
        assert_eq!(to_base32((1 << 15) - 1, 3), "ZZZ");
    }

    #[test]
    fn test_base32_parse() {
        assert_eq!(from_base32("010", 0).unwrap(), 32);
        assert_eq!(from_base32("ZZZZ", 0).unwrap(), (1 << 20) - 1);
        assert_eq!(
            from_base32("0O0", 5),
            Err(GeoIdError::InvalidSymbol { symbol: 'O', position: 6 })
        );
    }
}
