//! Request DTOs for the admin API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string of the key listing and prefix invalidation endpoints
/// (`?prefix=categories-summary_user42_`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixQuery {
    /// Key prefix to restrict to
    #[serde(default)]
    pub prefix: Option<String>,
}

impl PrefixQuery {
    /// The prefix, with an empty string treated as absent.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns the prefix required for invalidation, or an error message
    /// when it is missing. An empty prefix would match every key.
    pub fn required_prefix(&self) -> Result<&str, String> {
        self.prefix()
            .ok_or_else(|| "A non-empty 'prefix' is required; use /api/admin/cache/clear to clear everything".to_string())
    }
}
