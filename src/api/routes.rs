//! API Routes
//!
//! Configures the Axum router with the cache administration endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_invalidate_handler, cache_keys_handler, cache_stats_handler,
    health_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/admin/cache/clear",
            get(cache_stats_handler).post(cache_clear_handler),
        )
        .route(
            "/api/admin/cache/keys",
            get(cache_keys_handler).delete(cache_invalidate_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
