//! Cache Module
//!
//! In-memory caching with per-entry TTL, lazy expiry and prefix-scoped
//! invalidation.

mod entry;
mod keys;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, CacheValue};
pub use keys::{cache_key, namespace_prefix, CacheNamespace, CacheTtl, KEY_DELIMITER};
pub use shared::MemoryCache;
pub use stats::{CacheStats, ClearOutcome};
pub use store::CacheStore;
