//! Shared Cache Handle
//!
//! Cloneable, thread-safe front for [`CacheStore`] used by request handlers.
//!
//! Misses are not deduplicated: two requests that miss the same key at the
//! same time both run their compute function, and the later `set` wins.

use std::any::Any;
use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, CacheStore, ClearOutcome};

static GLOBAL: OnceLock<MemoryCache> = OnceLock::new();

// == Memory Cache ==
/// Handle to a cache store shared between tasks.
///
/// Clones point at the same store. Each operation holds the lock only for
/// its own duration, never across a caller's computation.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    /// Creates an isolated, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache, creating it on first use.
    pub fn global() -> &'static MemoryCache {
        GLOBAL.get_or_init(MemoryCache::new)
    }

    // == Reads ==
    /// Returns the live value stored under `key`, or `None` on a miss.
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        let value = self.inner.write().await.get::<T>(key);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Returns the live entry (value plus timestamps) stored under `key`.
    pub async fn get_entry(&self, key: &str) -> Option<CacheEntry> {
        self.inner.write().await.get_entry(key)
    }

    /// Live keys, optionally restricted to a prefix.
    pub async fn keys(&self, prefix: Option<&str>) -> Vec<String> {
        self.inner.write().await.keys(prefix)
    }

    /// Active/expired breakdown. Leaves stale entries in place.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    // == Writes ==
    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub async fn set<T>(&self, key: impl Into<String>, value: T, ttl: Duration)
    where
        T: Any + Send + Sync,
    {
        let key = key.into();
        debug!(key = %key, ttl_ms = ttl.as_millis() as u64, "cache set");
        self.inner.write().await.set(key, value, ttl);
    }

    /// Removes `key`. Missing keys are not an error.
    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    /// Removes every entry.
    pub async fn clear(&self) -> ClearOutcome {
        let outcome = self.inner.write().await.clear();
        info!(cleared = outcome.cleared_count, "cache cleared");
        outcome
    }

    /// Takes stats and clears in one critical section, so the report
    /// describes exactly what was removed.
    pub async fn clear_with_stats(&self) -> (CacheStats, ClearOutcome) {
        let (stats, outcome) = {
            let mut store = self.inner.write().await;
            let stats = store.stats();
            (stats, store.clear())
        };
        info!(
            cleared = outcome.cleared_count,
            active = stats.active,
            expired = stats.expired,
            "cache cleared"
        );
        (stats, outcome)
    }

    /// Removes every key starting with `prefix`. Returns how many were removed.
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let removed = self.inner.write().await.invalidate_prefix(prefix);
        info!(prefix, removed, "cache prefix invalidated");
        removed
    }

    /// Removes stale entries ahead of any read.
    pub async fn purge_expired(&self) -> usize {
        self.inner.write().await.purge_expired()
    }

    // == Compute On Miss ==
    /// Returns the cached value for `key`, or runs `compute`, stores its
    /// result for `ttl` and returns it.
    pub async fn get_or_insert_with<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> T
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(value) = self.get::<T>(key).await {
            return value;
        }

        let value = compute().await;
        self.set(key, value.clone(), ttl).await;
        value
    }

    /// Fallible form of [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// A failed computation is returned as-is and nothing is cached.
    pub async fn get_or_try_insert_with<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<T, E>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get::<T>(key).await {
            return Ok(value);
        }

        let value = compute().await?;
        self.set(key, value.clone(), ttl).await;
        Ok(value)
    }
}
