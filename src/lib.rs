//! Memory Cache - a process-wide in-memory TTL cache
//!
//! Request handlers share one [`MemoryCache`], look values up by composite
//! key and fall back to their own computation on a miss. Entries expire
//! lazily on read; an optional sweep reclaims memory in the background, and
//! a small admin API reports stats and clears or invalidates by prefix.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{cache_key, CacheNamespace, CacheTtl, MemoryCache};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
