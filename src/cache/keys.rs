//! Key Conventions
//!
//! Composite keys are `namespace` followed by variable parts, joined by
//! [`KEY_DELIMITER`]. Sharing the namespace as a leading segment is what lets
//! callers invalidate one logical dataset by prefix without touching others.

use std::fmt;
use std::time::Duration;

/// Separator between the namespace and each variable key part.
pub const KEY_DELIMITER: char = '_';

// == Namespaces ==
/// Logical datasets that share the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    /// Per-user category tree with permission filtering applied
    CategoriesSummary,
    /// Paginated video listings of one subcategory
    SubcategoryVideos,
    /// Per-user permission snapshot
    UserPermissions,
    /// Aggregated analytics figures
    AnalyticsSummary,
}

impl CacheNamespace {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CategoriesSummary => "categories-summary",
            Self::SubcategoryVideos => "subcategory-videos",
            Self::UserPermissions => "user-permissions",
            Self::AnalyticsSummary => "analytics-summary",
        }
    }

    /// TTL class usually chosen for this dataset.
    pub const fn typical_ttl(self) -> Duration {
        match self {
            Self::CategoriesSummary => CacheTtl::CATEGORIES_SUMMARY,
            Self::SubcategoryVideos => CacheTtl::SUBCATEGORY_VIDEOS,
            Self::UserPermissions => CacheTtl::USER_PERMISSIONS,
            Self::AnalyticsSummary => CacheTtl::ANALYTICS_SUMMARY,
        }
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == TTL Classes ==
/// TTLs observed for each kind of cached dataset.
///
/// These are caller-side choices; `set` always takes the TTL explicitly.
pub struct CacheTtl;

impl CacheTtl {
    pub const USER_PERMISSIONS: Duration = Duration::from_secs(30 * 60);
    pub const CATEGORIES_SUMMARY: Duration = Duration::from_secs(4 * 60 * 60);
    pub const SUBCATEGORY_VIDEOS: Duration = Duration::from_secs(10 * 60);
    pub const ANALYTICS_SUMMARY: Duration = Duration::from_secs(15 * 60);
}

// == Builders ==
/// Builds a full key: `namespace_part1_part2...`.
pub fn cache_key<I, P>(namespace: CacheNamespace, parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: fmt::Display,
{
    let mut key = namespace.as_str().to_string();
    for part in parts {
        key.push(KEY_DELIMITER);
        key.push_str(&part.to_string());
    }
    key
}

/// Builds the prefix matching every key of `namespace` whose leading variable
/// parts equal `parts`. The trailing delimiter keeps `user1` from matching
/// `user10`.
pub fn namespace_prefix<I, P>(namespace: CacheNamespace, parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: fmt::Display,
{
    let mut prefix = cache_key(namespace, parts);
    prefix.push(KEY_DELIMITER);
    prefix
}
