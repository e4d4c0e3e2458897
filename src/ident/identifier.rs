//! The public identifier value.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::value_of;
use crate::error::GeoIdError;
use crate::geohash::decoder::split_flag;
use crate::geohash::encoder::HASH_LENGTH;
use crate::ident::suffix::decode_suffix;

/// Separator placed between prefix and suffix by default.
pub const DEFAULT_SEPARATOR: &str = "-";

/// A composed identifier: geohash prefix, separator and counter suffix.
///
/// Identifiers are created once and stored; they are never re-derived from
/// a coordinate, because each one consumes a counter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    prefix: String,
    separator: String,
    suffix: String,
}

impl Identifier {
    pub(crate) fn new(prefix: String, separator: &str, suffix: String) -> Self {
        Self {
            prefix,
            separator: separator.to_string(),
            suffix,
        }
    }

    /// Parse a stored identifier, with or without the `-` separator.
    ///
    /// Every prefix is exactly five characters, so the concatenated form is
    /// unambiguous. Input is taken as-is; normalize typed input first.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocode_id::Identifier;
    ///
    /// let id = Identifier::parse("82FM8-GPU")?;
    /// assert_eq!(id.prefix(), "82FM8");
    /// assert_eq!(id.counter()?, 42);
    ///
    /// assert_eq!(Identifier::parse("82FM8GPU")?.suffix(), "GPU");
    /// # Ok::<(), geocode_id::GeoIdError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, GeoIdError> {
        if !text.is_ascii() || text.len() <= HASH_LENGTH {
            return Err(GeoIdError::InvalidIdentifier(format!(
                "{:?} is too short or not ASCII",
                text
            )));
        }

        let (prefix, rest) = text.split_at(HASH_LENGTH);
        let (separator, suffix) = match rest.strip_prefix(DEFAULT_SEPARATOR) {
            Some(suffix) => (DEFAULT_SEPARATOR, suffix),
            None => ("", rest),
        };

        let (_, body, offset) = split_flag(prefix);
        for (position, symbol) in body.chars().enumerate() {
            if value_of(symbol).is_none() {
                return Err(GeoIdError::InvalidSymbol {
                    symbol,
                    position: position + offset,
                });
            }
        }

        // Validates the suffix symbols and width.
        decode_suffix(suffix)?;

        Ok(Self::new(prefix.to_string(), separator, suffix.to_string()))
    }

    /// The geohash prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The obfuscated counter suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The separator between prefix and suffix; may be empty.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The counter value the suffix was generated from.
    pub fn counter(&self) -> Result<i64, GeoIdError> {
        decode_suffix(&self.suffix)
    }

    /// The identifier as it is displayed.
    pub fn into_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.separator, self.suffix)
    }
}

impl FromStr for Identifier {
    type Err = GeoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = Identifier::new("82FM8".to_string(), "-", "GPU".to_string());
        assert_eq!(id.to_string(), "82FM8-GPU");

        let bare = Identifier::new("82FM8".to_string(), "", "GPU".to_string());
        assert_eq!(bare.into_string(), "82FM8GPU");
    }

    #[test]
    fn test_parse_both_forms() {
        let dashed: Identifier = "WFBNU-K001".parse().unwrap();
        assert_eq!(dashed.prefix(), "WFBNU");
        assert_eq!(dashed.separator(), "-");
        assert_eq!(dashed.counter().unwrap(), 32768);

        let bare = Identifier::parse("WFBNUK001").unwrap();
        assert_eq!(bare.separator(), "");
        assert_eq!(bare.suffix(), "K001");
        assert_eq!(bare.to_string(), "WFBNUK001");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(Identifier::parse("82FM8"), Err(GeoIdError::InvalidIdentifier(_))));
        assert!(matches!(Identifier::parse("82FM8-"), Err(GeoIdError::InvalidSuffix(_))));
        assert!(matches!(Identifier::parse("82FM8-GP"), Err(GeoIdError::InvalidSuffix(_))));
        assert_eq!(
            Identifier::parse("82FO8-GPU"),
            Err(GeoIdError::InvalidSymbol { symbol: 'O', position: 3 })
        );
        assert!(Identifier::parse("82FM8–GPU").is_err());
    }
}
