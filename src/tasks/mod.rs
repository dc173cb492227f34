//! Background Tasks Module
//!
//! # Tasks
//! - Expiry sweep: drops stale cache entries between reads

mod cleanup;

pub use cleanup::spawn_cleanup_task;
