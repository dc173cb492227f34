//! Expiry Sweep Task
//!
//! Periodically removes stale entries so memory does not hold data nobody
//! reads again. Reads already treat stale entries as absent, so the sweep
//! only bounds memory and never changes what a caller observes.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a task that purges expired entries every `interval`.
///
/// The returned handle is aborted on shutdown. Panics if `interval` is zero.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::global().clone();
/// let sweep = spawn_cleanup_task(cache, Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep.abort();
/// ```
pub fn spawn_cleanup_task(cache: MemoryCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs_f64(), "Starting cache expiry sweep");

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.purge_expired().await;
            if removed > 0 {
                info!(removed, "Expiry sweep removed stale entries");
            } else {
                debug!("Expiry sweep found no stale entries");
            }
        }
    })
}
