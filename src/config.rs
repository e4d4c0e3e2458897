//! Configuration for identifier generation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GeoIdError;
use crate::ident::identifier::DEFAULT_SEPARATOR;
use crate::types::Bounds;

/// Settings for an [`IdentifierComposer`](crate::IdentifierComposer).
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// use geocode_id::IdentifierConfig;
///
/// let config: IdentifierConfig = serde_json::from_str(r#"{ "separator": "" }"#).unwrap();
/// assert_eq!(config.separator, "");
/// assert_eq!(config.region, geocode_id::Bounds::CONTINENTAL_US);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Reference region that gets five symbols of regional precision.
    pub region: Bounds,
    /// Placed between prefix and suffix. Either `-` or empty.
    pub separator: String,
    /// Upper bound on one counter increment, in milliseconds. When set,
    /// identifiers must be generated inside a tokio runtime with the time
    /// driver enabled.
    pub counter_timeout_ms: Option<u64>,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            region: Bounds::CONTINENTAL_US,
            separator: DEFAULT_SEPARATOR.to_string(),
            counter_timeout_ms: None,
        }
    }
}

impl IdentifierConfig {
    /// Check the region and separator.
    pub fn validate(&self) -> Result<(), GeoIdError> {
        self.region.validate()?;

        if !self.separator.is_empty() && self.separator != DEFAULT_SEPARATOR {
            return Err(GeoIdError::InvalidConfig(format!(
                "separator must be {:?} or empty, got {:?}",
                DEFAULT_SEPARATOR, self.separator
            )));
        }

        if self.counter_timeout_ms == Some(0) {
            return Err(GeoIdError::InvalidConfig(
                "counter_timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The counter timeout as a [`Duration`].
    pub fn counter_timeout(&self) -> Option<Duration> {
        self.counter_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = IdentifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.counter_timeout(), None);
    }

    #[test]
    fn test_full_document() {
        let config: IdentifierConfig = serde_json::from_str(
            r#"{
                "region": { "min_lat": 35.0, "max_lat": 70.0, "min_lon": -10.0, "max_lon": 40.0 },
                "separator": "-",
                "counter_timeout_ms": 250
            }"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.region.min_lat, 35.0);
        assert_eq!(config.counter_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let separator = IdentifierConfig {
            separator: "A".to_string(),
            ..IdentifierConfig::default()
        };
        assert!(matches!(separator.validate(), Err(GeoIdError::InvalidConfig(_))));

        let timeout = IdentifierConfig {
            counter_timeout_ms: Some(0),
            ..IdentifierConfig::default()
        };
        assert!(matches!(timeout.validate(), Err(GeoIdError::InvalidConfig(_))));

        let region = IdentifierConfig {
            region: Bounds {
                min_lat: 10.0,
                max_lat: 0.0,
                min_lon: 0.0,
                max_lon: 10.0,
            },
            ..IdentifierConfig::default()
        };
        assert!(matches!(region.validate(), Err(GeoIdError::InvalidRegion(_))));
    }
}
