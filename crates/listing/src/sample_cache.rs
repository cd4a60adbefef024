//! Explicit cache collaborator for secondary listing lookups.
//!
//! Gallery samples and similar side-strips are expensive enough to
//! memoize but too small for real cache infrastructure. `SampleCache` is
//! an injected collaborator rather than ambient module state, so tests
//! and handlers each own their instance.

use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Keyed memoization: the producer runs at most once per key.
///
/// The lock is held across the producer, which is fine for the cheap
/// in-memory samplers this serves; keep I/O out of producers.
#[derive(Debug, Default)]
pub struct SampleCache<V> {
    entries: Mutex<HashMap<String, V>>,
}

impl<V: Clone> SampleCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, computing it on first use.
    pub fn get_or_compute(&self, key: &str, producer: impl FnOnce() -> V) -> V {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(value) = entries.get(key) {
            return value.clone();
        }
        debug!(key, "sample cache miss");
        let value = producer();
        entries.insert(key.to_string(), value.clone());
        value
    }

    /// Number of cached keys (for tests and diagnostics).
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_producer_runs_once_per_key() {
        let cache = SampleCache::new();
        let calls = AtomicUsize::new(0);

        let produce = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![1u32, 2, 3]
        };

        assert_eq!(cache.get_or_compute("gallery:firefox", produce), vec![1, 2, 3]);
        assert_eq!(
            cache.get_or_compute("gallery:firefox", || unreachable!("cached")),
            vec![1, 2, 3]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_distinct_keys_distinct_values() {
        let cache = SampleCache::new();
        cache.get_or_compute("a", || 1);
        cache.get_or_compute("b", || 2);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_compute("b", || 99), 2);
    }
}
