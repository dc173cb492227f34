//! Request and Response models for the admin API
//!
//! DTOs serialized to and from HTTP bodies and query strings.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PrefixQuery;
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, InvalidateResponse, KeysResponse,
    StatsResponse,
};
