//! The atomic counter collaborator.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::trace;

use crate::error::CounterError;

/// Hands out the next value of a per-key counter.
///
/// Implementations must be atomic per key: concurrent calls for the same key
/// never observe the same value. Gaps are acceptable, repeats are not.
/// Ordering across keys, and arrival order of racing callers, is irrelevant.
/// Implementations should start every key at the same first value.
///
/// Callers invoke this once per identifier and never retry it, since a retry
/// after an ambiguous failure could consume a value twice.
#[async_trait]
pub trait AtomicCounter: Send + Sync {
    /// Increment the counter for `key` and return its new value.
    async fn increment_and_get(&self, key: &str) -> Result<i64, CounterError>;
}

#[async_trait]
impl<T: AtomicCounter + ?Sized> AtomicCounter for std::sync::Arc<T> {
    async fn increment_and_get(&self, key: &str) -> Result<i64, CounterError> {
        (**self).increment_and_get(key).await
    }
}

#[async_trait]
impl<T: AtomicCounter + ?Sized> AtomicCounter for &T {
    async fn increment_and_get(&self, key: &str) -> Result<i64, CounterError> {
        (**self).increment_and_get(key).await
    }
}

/// In-process counter backed by a mutex-guarded map.
///
/// Suitable for tests and single-process deployments. Values do not survive
/// a restart.
#[derive(Debug)]
pub struct InMemoryCounter {
    first_value: i64,
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemoryCounter {
    /// A counter whose keys start at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A counter whose keys start at `first_value`.
    pub fn starting_at(first_value: i64) -> Self {
        Self {
            first_value,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Last value handed out for `key`, if any.
    pub fn current(&self, key: &str) -> Option<i64> {
        self.counters.lock().get(key).copied()
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.counters.lock().len()
    }

    /// Whether no key has been incremented yet.
    pub fn is_empty(&self) -> bool {
        self.counters.lock().is_empty()
    }

    fn next(&self, key: &str) -> Result<i64, CounterError> {
        let mut counters = self.counters.lock();
        let value = match counters.get(key) {
            Some(&last) => last
                .checked_add(1)
                .ok_or_else(|| CounterError::Backend(format!("counter for {} is exhausted", key)))?,
            None => self.first_value,
        };
        counters.insert(key.to_string(), value);
        Ok(value)
    }
}

impl Default for InMemoryCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AtomicCounter for InMemoryCounter {
    async fn increment_and_get(&self, key: &str) -> Result<i64, CounterError> {
        let value = self.next(key)?;
        trace!(key, value, "in-memory counter incremented");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_keys_are_independent() {
        let counter = InMemoryCounter::new();
        assert!(counter.is_empty());

        assert_eq!(counter.increment_and_get("82FM8").await.unwrap(), 1);
        assert_eq!(counter.increment_and_get("82FM8").await.unwrap(), 2);
        assert_eq!(counter.increment_and_get("WFBNU").await.unwrap(), 1);

        assert_eq!(counter.current("82FM8"), Some(2));
        assert_eq!(counter.current("00000"), None);
        assert_eq!(counter.len(), 2);
    }

    #[tokio::test]
    async fn test_starting_value() {
        let counter = InMemoryCounter::starting_at(0);
        assert_eq!(counter.increment_and_get("82FM8").await.unwrap(), 0);
        assert_eq!(counter.increment_and_get("82FM8").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_counter_fails() {
        let counter = InMemoryCounter::starting_at(i64::MAX);
        assert_eq!(counter.increment_and_get("K").await.unwrap(), i64::MAX);
        assert!(matches!(
            counter.increment_and_get("K").await,
            Err(CounterError::Backend(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_distinct() {
        let counter = Arc::new(InMemoryCounter::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                let mut seen = Vec::new();
                for _ in 0..100 {
                    seen.push(counter.increment_and_get("82FM8").await.unwrap());
                }
                seen
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.await.unwrap());
        }
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&800));
    }
}
