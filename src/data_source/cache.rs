//! Shared TTL cache for upstream responses.
//!
//! A single LRU map keyed by deterministic cache-key strings. Entries carry
//! their own TTL; expired entries are treated as absent and evicted on read.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::constants::RESPONSE_CACHE_CAPACITY;

/// One cached upstream payload with its expiry bookkeeping
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    /// Creates a new cache entry stamped with the current time
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// Checks whether the entry has outlived its TTL
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }

    /// Remaining time until expiration
    pub fn time_until_expiry(&self) -> Duration {
        self.ttl.saturating_sub(self.cached_at.elapsed())
    }
}

static RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CacheEntry>>> = LazyLock::new(|| {
    RwLock::new(LruCache::new(
        NonZeroUsize::new(RESPONSE_CACHE_CAPACITY).expect("cache capacity must be non-zero"),
    ))
});

/// Retrieves a cached value if present and not expired. Expired entries are
/// evicted and reported as absent, never as an error.
pub async fn get(key: &str) -> Option<Value> {
    let mut cache = RESPONSE_CACHE.write().await;

    if let Some(entry) = cache.get(key) {
        if !entry.is_expired() {
            trace!(
                "Cache hit: key={}, age={:?}, remaining={:?}",
                key,
                entry.cached_at.elapsed(),
                entry.time_until_expiry()
            );
            return Some(entry.value.clone());
        }
        debug!(
            "Evicting expired cache entry: key={}, age={:?}, ttl={:?}",
            key,
            entry.cached_at.elapsed(),
            entry.ttl
        );
        cache.pop(key);
    } else {
        trace!("Cache miss: key={key}");
    }

    None
}

/// Stores a value under the given key. A zero TTL means do-not-cache and
/// the write is skipped entirely.
pub async fn set(key: String, value: Value, ttl: Duration) {
    if ttl.is_zero() {
        debug!("Skipping cache write for zero TTL: key={key}");
        return;
    }

    let mut cache = RESPONSE_CACHE.write().await;
    cache.put(key.clone(), CacheEntry::new(value, ttl));
    debug!("Cached response: key={key}, ttl={ttl:?}");
}

/// Removes a single entry
pub async fn delete(key: &str) {
    let mut cache = RESPONSE_CACHE.write().await;
    if cache.pop(key).is_some() {
        debug!("Deleted cache entry: key={key}");
    }
}

/// Drops every entry. Used by tests and operational tooling.
pub async fn clear() {
    let mut cache = RESPONSE_CACHE.write().await;
    cache.clear();
}

/// Number of live entries (expired-but-unevicted entries count until read)
pub async fn len() -> usize {
    RESPONSE_CACHE.read().await.len()
}
