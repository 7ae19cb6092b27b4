//! Process-local cache store.

use super::CacheStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use storefront_core::CatalogResult;
use tracing::debug;

/// In-memory cache store, one map per namespace.
///
/// Unbounded and never expiring, same as the Redis store.
#[derive(Component, Debug, Default)]
#[shaku(interface = CacheStore)]
pub struct InMemoryCacheStore {
    #[shaku(default)]
    entries: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryCacheStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries across all namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().values().map(HashMap::len).sum()
    }

    /// Returns true if nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get_raw(&self, namespace: &str, key: &str) -> CatalogResult<Option<String>> {
        let value = self
            .entries
            .read()
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .cloned();

        match &value {
            Some(_) => debug!("Cache hit for '{}' in '{}'", key, namespace),
            None => debug!("Cache miss for '{}' in '{}'", key, namespace),
        }

        Ok(value)
    }

    async fn put_raw(&self, namespace: &str, key: &str, value: &str) -> CatalogResult<()> {
        self.entries
            .write()
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());

        debug!("Cached '{}' in '{}'", key, namespace);
        Ok(())
    }

    async fn ping(&self) -> CatalogResult<()> {
        Ok(())
    }
}
