//! Dependency injection module using Shaku.
//!
//! One module per catalog cache mode:
//! - `RedisCatalogModule`: read-through cache in Redis hashes
//! - `MemoryCatalogModule`: read-through cache in process memory
//! - `DirectCatalogModule`: no cache, every read hits the upstream

use std::sync::Arc;
use storefront_config::AppConfig;
use storefront_core::{module, CatalogResult};
use storefront_security::UserServiceClient;
use storefront_service::{
    create_pool, CachedProductServiceImpl, InMemoryCacheStore, ProductServiceImpl,
    RedisCacheStore,
};
use storefront_upstream::FakeStoreClient;
use tracing::info;

module! {
    pub RedisCatalogModule {
        components = [
            FakeStoreClient,
            RedisCacheStore,
            CachedProductServiceImpl,
            UserServiceClient,
        ],
        providers = [],
    }
}

module! {
    pub MemoryCatalogModule {
        components = [
            FakeStoreClient,
            InMemoryCacheStore,
            CachedProductServiceImpl,
            UserServiceClient,
        ],
        providers = [],
    }
}

module! {
    pub DirectCatalogModule {
        components = [
            FakeStoreClient,
            ProductServiceImpl,
            UserServiceClient,
        ],
        providers = [],
    }
}

/// Builds the Redis-cached module.
///
/// Fails if Redis does not answer a `PING`.
pub async fn build_redis_module(config: &AppConfig) -> CatalogResult<Arc<RedisCatalogModule>> {
    let upstream = FakeStoreClient::new(&config.upstream)?;
    let users = UserServiceClient::new(&config.security)?;
    let pool = Arc::new(create_pool(&config.redis).await?);

    let module = RedisCatalogModule::builder()
        .with_component_parameters::<FakeStoreClient>(upstream.into_parameters())
        .with_component_parameters::<RedisCacheStore>(RedisCacheStore::parameters(pool))
        .with_component_parameters::<UserServiceClient>(users.into_parameters())
        .build();

    info!("Catalog wired with Redis cache at {}", config.redis.url);
    Ok(Arc::new(module))
}

/// Builds the in-memory cached module.
pub fn build_memory_module(config: &AppConfig) -> CatalogResult<Arc<MemoryCatalogModule>> {
    let upstream = FakeStoreClient::new(&config.upstream)?;
    let users = UserServiceClient::new(&config.security)?;

    let module = MemoryCatalogModule::builder()
        .with_component_parameters::<FakeStoreClient>(upstream.into_parameters())
        .with_component_parameters::<UserServiceClient>(users.into_parameters())
        .build();

    info!("Catalog wired with in-memory cache");
    Ok(Arc::new(module))
}

/// Builds the uncached module.
pub fn build_direct_module(config: &AppConfig) -> CatalogResult<Arc<DirectCatalogModule>> {
    let upstream = FakeStoreClient::new(&config.upstream)?;
    let users = UserServiceClient::new(&config.security)?;

    let module = DirectCatalogModule::builder()
        .with_component_parameters::<FakeStoreClient>(upstream.into_parameters())
        .with_component_parameters::<UserServiceClient>(users.into_parameters())
        .build();

    info!("Catalog wired without cache");
    Ok(Arc::new(module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::CatalogError;
    use storefront_rest::AppState;

    #[tokio::test]
    async fn test_memory_module_resolves_ready_catalog() {
        let module = build_memory_module(&AppConfig::default()).unwrap();
        let state = AppState::from_module(&*module);
        assert!(state.catalog.check_ready().await.is_ok());
    }

    #[tokio::test]
    async fn test_direct_module_resolves_ready_catalog() {
        let module = build_direct_module(&AppConfig::default()).unwrap();
        let state = AppState::from_module(&*module);
        assert!(state.catalog.check_ready().await.is_ok());
    }

    #[test]
    fn test_memory_module_shares_catalog_instance() {
        let module = build_memory_module(&AppConfig::default()).unwrap();
        let first = AppState::from_module(&*module);
        let second = AppState::from_module(&*module);
        assert!(Arc::ptr_eq(&first.catalog, &second.catalog));
        assert!(Arc::ptr_eq(&first.token_validator, &second.token_validator));
    }

    #[test]
    fn test_invalid_upstream_url_fails_build() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "not a url".to_string();

        let result = build_direct_module(&config);
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_redis_module_fails_without_redis() {
        let mut config = AppConfig::default();
        config.redis.url = "redis://127.0.0.1:1".to_string();

        let result = build_redis_module(&config).await;
        assert!(matches!(result, Err(CatalogError::Cache(_))));
    }
}
