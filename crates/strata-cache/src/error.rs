//! Error type for cache lookups.

use thiserror::Error;

/// The failure a cache lookup can surface to its caller.
///
/// Everything else that can go wrong inside the cache (configuration
/// problems, source creation failures, unreadable or malformed files)
/// is recovered locally with logging. A lookup only fails when every
/// source reported "not found" for the key.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No source could resolve the key.
    #[error("no document found for key '{key}'")]
    Miss {
        /// The key that could not be resolved.
        key: String,
    },
}

impl CacheError {
    /// Creates a Miss error.
    pub fn miss(key: impl Into<String>) -> Self {
        Self::Miss { key: key.into() }
    }

    /// Returns the key the failed lookup was for.
    pub fn key(&self) -> &str {
        match self {
            Self::Miss { key } => key,
        }
    }
}
