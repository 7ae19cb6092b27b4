//! Catalog cache mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which catalog implementation the server wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// Read-through cache backed by Redis hashes.
    #[default]
    Redis,
    /// Read-through cache held in process memory.
    Memory,
    /// Every request goes straight to the upstream.
    Disabled,
}

impl CacheMode {
    /// Returns true if reads go through a cache.
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis => write!(f, "redis"),
            Self::Memory => write!(f, "memory"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_mode_default_is_redis() {
        assert_eq!(CacheMode::default(), CacheMode::Redis);
    }

    #[test]
    fn test_cache_mode_is_cached() {
        assert!(CacheMode::Redis.is_cached());
        assert!(CacheMode::Memory.is_cached());
        assert!(!CacheMode::Disabled.is_cached());
    }

    #[test]
    fn test_cache_mode_serde() {
        let mode: CacheMode = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(mode, CacheMode::Memory);
        assert_eq!(serde_json::to_string(&CacheMode::Disabled).unwrap(), "\"disabled\"");
        assert_eq!(CacheMode::Redis.to_string(), "redis");
    }
}
