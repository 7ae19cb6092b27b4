//! Redis-based cache store.

use super::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use shaku::Component;
use std::sync::Arc;
use storefront_config::RedisConfig;
use storefront_core::{CatalogError, CatalogResult};
use tracing::{debug, info};

/// Create a Redis connection pool and check that the server answers.
pub async fn create_pool(config: &RedisConfig) -> CatalogResult<Pool> {
    info!("Creating Redis connection pool for the catalog cache...");

    let pool = Config::from_url(&config.url)
        .builder()
        .map_err(|e| CatalogError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| CatalogError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    let mut conn = pool
        .get()
        .await
        .map_err(|e| CatalogError::Cache(format!("Failed to get Redis connection: {}", e)))?;
    redis::cmd("PING")
        .query_async::<String>(&mut *conn)
        .await
        .map_err(|e| CatalogError::Cache(format!("Redis PING failed: {}", e)))?;

    info!("Redis connection pool created successfully");
    Ok(pool)
}

/// Redis-backed cache store.
///
/// Each namespace is a Redis hash; entries are written with `HSET` and
/// carry no TTL. The pool has no default, so a module that wires this
/// store without passing [`RedisCacheStore::parameters`] fails to build.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct RedisCacheStore {
    pool: Arc<Pool>,
}

impl RedisCacheStore {
    /// Create a store over a connection pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    /// DI parameters for a module that wires this store.
    #[must_use]
    pub fn parameters(pool: Arc<Pool>) -> RedisCacheStoreParameters {
        RedisCacheStoreParameters { pool }
    }

    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| CatalogError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("pool_size", &self.pool.status().max_size)
            .finish()
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get_raw(&self, namespace: &str, key: &str) -> CatalogResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.hget(namespace, key).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to read '{}' from '{}': {}", key, namespace, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for '{}' in '{}'", key, namespace),
            None => debug!("Cache miss for '{}' in '{}'", key, namespace),
        }

        Ok(value)
    }

    async fn put_raw(&self, namespace: &str, key: &str, value: &str) -> CatalogResult<()> {
        let mut conn = self.get_conn().await?;
        conn.hset::<_, _, _, ()>(namespace, key, value)
            .await
            .map_err(|e| {
                CatalogError::Cache(format!("Failed to write '{}' to '{}': {}", key, namespace, e))
            })?;

        debug!("Cached '{}' in '{}'", key, namespace);
        Ok(())
    }

    async fn ping(&self) -> CatalogResult<()> {
        let mut conn = self.get_conn().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map_err(|e| CatalogError::Cache(format!("Redis PING failed: {}", e)))?;
        Ok(())
    }
}
