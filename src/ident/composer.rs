//! Identifier composition.
//!
//! This module provides the main API for issuing identifiers: encode the
//! coordinate, take the next counter value for that prefix, obfuscate it, and
//! join the two halves.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::IdentifierConfig;
use crate::error::{CounterError, GeoIdError};
use crate::geohash::encoder::GeoHashCodec;
use crate::ident::counter::AtomicCounter;
use crate::ident::identifier::{Identifier, DEFAULT_SEPARATOR};
use crate::ident::suffix::encode_suffix;
use crate::types::Coordinate;

/// Issues identifiers from coordinates using an injected counter.
///
/// The composer holds no mutable state. All serialization of counter values
/// happens inside the [`AtomicCounter`], so one composer can be shared by any
/// number of concurrent callers.
#[derive(Debug)]
pub struct IdentifierComposer<C> {
    codec: GeoHashCodec,
    counter: C,
    separator: String,
    timeout: Option<Duration>,
}

impl<C: AtomicCounter> IdentifierComposer<C> {
    /// A composer with the default region, `-` separator and no timeout.
    pub fn new(counter: C) -> Self {
        Self {
            codec: GeoHashCodec::default(),
            counter,
            separator: DEFAULT_SEPARATOR.to_string(),
            timeout: None,
        }
    }

    /// A composer built from validated configuration.
    pub fn from_config(config: &IdentifierConfig, counter: C) -> Result<Self, GeoIdError> {
        config.validate()?;
        Ok(Self {
            codec: GeoHashCodec::new(config.region)?,
            counter,
            separator: config.separator.clone(),
            timeout: config.counter_timeout(),
        })
    }

    /// Join prefix and suffix without a separator.
    pub fn concatenated(mut self) -> Self {
        self.separator.clear();
        self
    }

    /// Bound every counter increment by `timeout`.
    ///
    /// The timer runs on the tokio time driver: calls must happen inside a
    /// runtime built with `enable_time()` (or `enable_all()`), otherwise tokio
    /// panics when the timer is created.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The codec used for prefixes.
    pub fn codec(&self) -> &GeoHashCodec {
        &self.codec
    }

    /// The injected counter.
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Issue an identifier for `coordinate`.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - Where the identified thing was registered
    ///
    /// # Returns
    ///
    /// The composed identifier, whose prefix is the geohash of `coordinate`.
    ///
    /// # Errors
    ///
    /// - [`GeoIdError::InvalidCoordinate`] before any counter value is consumed
    /// - [`GeoIdError::IdentifierGenerationFailed`] when the counter fails or times out
    /// - [`GeoIdError::InvalidCounter`] / [`GeoIdError::CounterOverflow`] when the
    ///   counter hands back a value no suffix can represent
    ///
    /// No partial identifier is returned on any error.
    pub async fn generate(&self, coordinate: Coordinate) -> Result<Identifier, GeoIdError> {
        self.generate_inner(coordinate, self.timeout).await
    }

    /// Issue an identifier, bounding the counter call by `timeout` instead of
    /// the configured one.
    ///
    /// Requires a tokio runtime with the time driver enabled, as for
    /// [`with_timeout`](Self::with_timeout).
    pub async fn generate_with_timeout(
        &self,
        coordinate: Coordinate,
        timeout: Duration,
    ) -> Result<Identifier, GeoIdError> {
        self.generate_inner(coordinate, Some(timeout)).await
    }

    /// Issue an identifier for a raw latitude/longitude pair.
    pub async fn generate_at(&self, latitude: f64, longitude: f64) -> Result<Identifier, GeoIdError> {
        self.generate(Coordinate::new(latitude, longitude)?).await
    }

    async fn generate_inner(
        &self,
        coordinate: Coordinate,
        timeout: Option<Duration>,
    ) -> Result<Identifier, GeoIdError> {
        // Step 1: Encode the prefix (re-validates fields set directly)
        let prefix = self.codec.encode(coordinate.latitude, coordinate.longitude)?;

        // Step 2: Take the next counter value for this prefix, exactly once
        let counter = self.next_counter(&prefix, timeout).await?;

        // Step 3: Obfuscate it
        let suffix = encode_suffix(counter).map_err(|err| {
            warn!(prefix = %prefix, counter, error = %err, "counter value has no suffix");
            err
        })?;

        let identifier = Identifier::new(prefix, &self.separator, suffix);
        debug!(identifier = %identifier, counter, "identifier generated");
        Ok(identifier)
    }

    async fn next_counter(&self, prefix: &str, timeout: Option<Duration>) -> Result<i64, GeoIdError> {
        let result = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.counter.increment_and_get(prefix))
                .await
                .unwrap_or(Err(CounterError::Timeout(limit))),
            None => self.counter.increment_and_get(prefix).await,
        };

        result.map_err(|source| {
            warn!(prefix, error = %source, "counter increment failed");
            GeoIdError::IdentifierGenerationFailed {
                key: prefix.to_string(),
                source,
            }
        })
    }
}

/// Issue an identifier with the default region and `-` separator.
///
/// # Examples
///
/// ```
/// use geocode_id::{generate_identifier, Coordinate, InMemoryCounter};
///
/// # tokio_test_block(async {
/// let counter = InMemoryCounter::new();
/// let id = generate_identifier(&counter, Coordinate::new(37.7749, -122.4194)?).await?;
/// assert_eq!(id, "82FM8-Y8E");
/// # Ok::<(), geocode_id::GeoIdError>(())
/// # }).unwrap();
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn generate_identifier<C>(counter: &C, coordinate: Coordinate) -> Result<String, GeoIdError>
where
    C: AtomicCounter + ?Sized,
{
    IdentifierComposer::new(counter)
        .generate(coordinate)
        .await
        .map(Identifier::into_string)
}
