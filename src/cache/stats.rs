//! Cache Statistics Module
//!
//! Point-in-time reports on how much of the cache is still live.

use serde::Serialize;

// == Cache Stats ==
/// Classification of the stored entries against a single `now` snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries that have not reached their expiry instant
    pub active: usize,
    /// Entries past their expiry instant but not yet removed
    pub expired: usize,
    /// `active + expired`
    pub total: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts one entry as live or stale.
    pub fn record(&mut self, expired: bool) {
        if expired {
            self.expired += 1;
        } else {
            self.active += 1;
        }
        self.total += 1;
    }

    // == Stale Ratio ==
    /// Share of stored entries that are expired, or 0.0 for an empty cache.
    pub fn stale_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.expired as f64 / self.total as f64
        }
    }
}

// == Clear Outcome ==
/// Result of wiping the whole cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearOutcome {
    /// Number of entries removed, live or stale
    pub cleared_count: usize,
}
