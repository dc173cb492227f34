//! API Handlers
//!
//! HTTP request handlers for the cache administration endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::MemoryCache;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, HealthResponse, InvalidateResponse, KeysResponse, PrefixQuery, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Shared cache handle
    pub cache: MemoryCache,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: MemoryCache) -> Self {
        Self { cache }
    }

    /// State backed by the process-wide cache.
    pub fn global() -> Self {
        Self::new(MemoryCache::global().clone())
    }
}

/// Handler for GET /api/admin/cache/clear
///
/// Reports how many entries are live and how many are stale.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.cache.stats().await))
}

/// Handler for POST /api/admin/cache/clear
///
/// Clears everything and returns the stats taken just before.
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let (stats_before, outcome) = state.cache.clear_with_stats().await;
    Json(ClearResponse::new(stats_before, outcome.cleared_count))
}

/// Handler for GET /api/admin/cache/keys
pub async fn cache_keys_handler(
    State(state): State<AppState>,
    Query(query): Query<PrefixQuery>,
) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.cache.keys(query.prefix()).await))
}

/// Handler for DELETE /api/admin/cache/keys
///
/// Removes every key under the given prefix. A missing prefix is rejected
/// rather than treated as "everything".
pub async fn cache_invalidate_handler(
    State(state): State<AppState>,
    Query(query): Query<PrefixQuery>,
) -> Result<Json<InvalidateResponse>> {
    let prefix = query.required_prefix().map_err(ApiError::InvalidRequest)?;
    let deleted = state.cache.invalidate_prefix(prefix).await;

    Ok(Json(InvalidateResponse::new(prefix, deleted)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
