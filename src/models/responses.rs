//! Response DTOs for the admin API
//!
//! Field names are camelCase on the wire.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for `GET /api/admin/cache/clear`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: CacheStats,
}

impl StatsResponse {
    pub fn new(stats: CacheStats) -> Self {
        Self {
            success: true,
            stats,
        }
    }
}

/// Response body for `POST /api/admin/cache/clear`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    pub success: bool,
    /// Stats taken immediately before the clear
    pub stats_before: CacheStats,
    /// Number of entries removed
    pub cleared_count: usize,
}

impl ClearResponse {
    pub fn new(stats_before: CacheStats, cleared_count: usize) -> Self {
        Self {
            success: true,
            stats_before,
            cleared_count,
        }
    }
}

/// Response body for `GET /api/admin/cache/keys`
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    pub success: bool,
    /// Live keys, sorted for stable output
    pub keys: Vec<String>,
}

impl KeysResponse {
    pub fn new(mut keys: Vec<String>) -> Self {
        keys.sort_unstable();
        Self {
            success: true,
            keys,
        }
    }
}

/// Response body for `DELETE /api/admin/cache/keys`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidateResponse {
    pub success: bool,
    pub prefix: String,
    pub deleted_count: usize,
}

impl InvalidateResponse {
    pub fn new(prefix: impl Into<String>, deleted_count: usize) -> Self {
        Self {
            success: true,
            prefix: prefix.into(),
            deleted_count,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
