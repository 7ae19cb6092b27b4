//! Cache store trait for namespaced key lookups.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::{CatalogResult, Interface};

/// Namespaced string store backing the read-through cache.
///
/// Values are JSON strings so the trait stays object safe; use
/// [`CacheStoreExt`] for typed access.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Looks up a raw value. `None` is a miss.
    async fn get_raw(&self, namespace: &str, key: &str) -> CatalogResult<Option<String>>;

    /// Stores a raw value, overwriting any previous one.
    async fn put_raw(&self, namespace: &str, key: &str, value: &str) -> CatalogResult<()>;

    /// Checks that the backend answers.
    async fn ping(&self) -> CatalogResult<()>;
}

/// Typed JSON helpers over any [`CacheStore`].
#[async_trait]
pub trait CacheStoreExt: CacheStore {
    /// Gets a typed value from the cache.
    async fn get<T: DeserializeOwned + Send>(
        &self,
        namespace: &str,
        key: &str,
    ) -> CatalogResult<Option<T>> {
        match self.get_raw(namespace, key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Puts a typed value into the cache.
    async fn put<T: Serialize + Send + Sync>(
        &self,
        namespace: &str,
        key: &str,
        value: &T,
    ) -> CatalogResult<()> {
        let json = serde_json::to_string(value)?;
        self.put_raw(namespace, key, &json).await
    }
}

impl<T: CacheStore + ?Sized> CacheStoreExt for T {}
