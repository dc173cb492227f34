//! API Module
//!
//! HTTP handlers and routing for the cache administration API.
//!
//! # Endpoints
//! - `GET /api/admin/cache/clear` - Report active/expired entry counts
//! - `POST /api/admin/cache/clear` - Clear the cache, returning the stats it had
//! - `GET /api/admin/cache/keys?prefix=` - List live keys
//! - `DELETE /api/admin/cache/keys?prefix=` - Invalidate one key prefix
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
