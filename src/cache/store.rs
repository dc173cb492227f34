//! Cache Store Module
//!
//! HashMap storage with read-time (lazy) TTL expiry. Every operation takes a
//! single clock reading and judges all entries against it.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, CacheValue, ClearOutcome};

// == Cache Store ==
/// Key to entry mapping with TTL expiry. No size cap and no eviction policy.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Creates or replaces the entry for `key`, resetting both timestamps.
    ///
    /// A zero `ttl` stores an entry that is already stale.
    pub fn set<T>(&mut self, key: impl Into<String>, value: T, ttl: Duration)
    where
        T: Any + Send + Sync,
    {
        self.set_shared(key, Arc::new(value), ttl);
    }

    /// Same as [`set`](Self::set) for a value that is already type-erased.
    pub fn set_shared(&mut self, key: impl Into<String>, value: CacheValue, ttl: Duration) {
        let entry = CacheEntry::new(value, current_timestamp_ms(), ttl);
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the live value for `key`.
    ///
    /// An entry found past its expiry is removed and reported as a miss.
    /// A hit never extends the TTL. Asking for a type other than the one that
    /// was stored is a miss that leaves the entry untouched.
    pub fn get<T>(&mut self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        let now = current_timestamp_ms();

        let entry = self.entries.get(key)?;
        if entry.is_expired_at(now) {
            self.entries.remove(key);
            debug!(key, "cache entry expired");
            return None;
        }

        let value = entry.value_as::<T>();
        if value.is_none() {
            debug!(key, "cache entry holds a different type");
        }
        value
    }

    /// Returns the raw live entry for `key`, applying the same lazy expiry
    /// as [`get`](Self::get).
    pub fn get_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let now = current_timestamp_ms();

        let entry = self.entries.get(key)?;
        if entry.is_expired_at(now) {
            self.entries.remove(key);
            return None;
        }
        Some(entry.clone())
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry, live or stale.
    pub fn clear(&mut self) -> ClearOutcome {
        let cleared_count = self.entries.len();
        self.entries.clear();
        ClearOutcome { cleared_count }
    }

    // == Keys ==
    /// Returns the live keys, optionally restricted to those starting with
    /// `prefix`. Stale entries met on the way are deleted. Order is
    /// unspecified.
    pub fn keys(&mut self, prefix: Option<&str>) -> Vec<String> {
        let now = current_timestamp_ms();
        let matches = |key: &str| prefix.map_or(true, |p| key.starts_with(p));

        self.entries
            .retain(|key, entry| !(matches(key.as_str()) && entry.is_expired_at(now)));

        self.entries
            .keys()
            .filter(|key| matches(key.as_str()))
            .cloned()
            .collect()
    }

    // == Invalidate Prefix ==
    /// Deletes every stored key starting with `prefix`, live or stale.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    // == Stats ==
    /// Classifies every entry as active or expired. Read-only: stale entries
    /// stay in place until a read or sweep removes them.
    pub fn stats(&self) -> CacheStats {
        let now = current_timestamp_ms();

        self.entries
            .values()
            .fold(CacheStats::new(), |mut stats, entry| {
                stats.record(entry.is_expired_at(now));
                stats
            })
    }

    // == Purge Expired ==
    /// Removes all stale entries. Returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Number of stored entries, including stale ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
