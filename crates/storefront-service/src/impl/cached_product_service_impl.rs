//! Read-through cached product catalog.

use super::product_service_impl as upstream_calls;
use crate::cache::{cache_keys, CacheStore, CacheStoreExt};
use crate::product_service::ProductCatalog;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use storefront_core::{CatalogResult, Product};
use storefront_upstream::{ProductPayload, ProductUpstream};
use tracing::debug;

/// Product catalog that serves `get_product` and `list_products` from the
/// cache store when it can.
///
/// A miss fetches from the upstream and writes the translated result back.
/// Nothing is cached on failure, and mutations leave cached entries alone,
/// so a product read before a PUT keeps its old value.
#[derive(Component)]
#[shaku(interface = ProductCatalog)]
pub struct CachedProductServiceImpl {
    #[shaku(inject)]
    upstream: Arc<dyn ProductUpstream>,
    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
}

impl CachedProductServiceImpl {
    /// Creates a new cached product service.
    pub fn new(upstream: Arc<dyn ProductUpstream>, cache: Arc<dyn CacheStore>) -> Self {
        Self { upstream, cache }
    }
}

impl std::fmt::Debug for CachedProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedProductServiceImpl").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductCatalog for CachedProductServiceImpl {
    async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        let cache_key = cache_keys::product_by_id(id);

        if let Some(cached) = self
            .cache
            .get::<Product>(cache_keys::PRODUCT_NAMESPACE, &cache_key)
            .await?
        {
            debug!("Cache hit for product: {}", id);
            return Ok(cached);
        }

        let product = upstream_calls::fetch_product(self.upstream.as_ref(), id).await?;

        self.cache
            .put(cache_keys::PRODUCT_NAMESPACE, &cache_key, &product)
            .await?;

        Ok(product)
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        if let Some(cached) = self
            .cache
            .get::<Vec<Product>>(cache_keys::CATALOG_NAMESPACE, cache_keys::ALL_PRODUCTS_KEY)
            .await?
        {
            debug!("Cache hit for product listing ({} products)", cached.len());
            return Ok(cached);
        }

        let products = upstream_calls::fetch_products(self.upstream.as_ref()).await?;

        self.cache
            .put(
                cache_keys::CATALOG_NAMESPACE,
                cache_keys::ALL_PRODUCTS_KEY,
                &products,
            )
            .await?;

        Ok(products)
    }

    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        upstream_calls::fetch_categories(self.upstream.as_ref()).await
    }

    async fn list_products_in_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        upstream_calls::fetch_products_in_category(self.upstream.as_ref(), category).await
    }

    async fn replace_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<Product>> {
        upstream_calls::replace_product(self.upstream.as_ref(), id, payload).await
    }

    async fn update_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<Product>> {
        upstream_calls::update_product(self.upstream.as_ref(), id, payload).await
    }

    async fn create_product(&self, payload: ProductPayload) -> CatalogResult<Option<Product>> {
        upstream_calls::create_product(self.upstream.as_ref(), payload).await
    }

    async fn delete_product(&self, id: i64) -> CatalogResult<Option<Product>> {
        upstream_calls::delete_product(self.upstream.as_ref(), id).await
    }

    async fn check_ready(&self) -> CatalogResult<()> {
        self.cache.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCacheStore;
    use crate::r#impl::test_support::{record, MockUpstream};
    use storefront_core::CatalogError;

    /// Cache store whose backend is always down.
    struct FailingCacheStore;

    #[async_trait]
    impl CacheStore for FailingCacheStore {
        async fn get_raw(&self, _namespace: &str, _key: &str) -> CatalogResult<Option<String>> {
            Err(CatalogError::Cache("connection reset".to_string()))
        }

        async fn put_raw(&self, _namespace: &str, _key: &str, _value: &str) -> CatalogResult<()> {
            Err(CatalogError::Cache("connection reset".to_string()))
        }

        async fn ping(&self) -> CatalogResult<()> {
            Err(CatalogError::Cache("connection refused".to_string()))
        }
    }

    fn service(
        upstream: MockUpstream,
        cache: Arc<InMemoryCacheStore>,
    ) -> CachedProductServiceImpl {
        CachedProductServiceImpl::new(Arc::new(upstream), cache)
    }

    #[tokio::test]
    async fn test_get_product_hit_skips_upstream() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_product()
            .times(1)
            .returning(|id| Ok(Some(record(id, "electronics"))));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        let first = service.get_product(1).await.unwrap();
        let second = service.get_product(1).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.id, 1);

        let stored: Option<Product> = cache
            .get(cache_keys::PRODUCT_NAMESPACE, "Product_1")
            .await
            .unwrap();
        assert_eq!(stored, Some(first));
    }

    #[tokio::test]
    async fn test_prepopulated_cache_is_served() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_product().never();

        let cache = Arc::new(InMemoryCacheStore::new());
        let cached = crate::mappers::to_domain(record(7, "jewelery"));
        cache
            .put(cache_keys::PRODUCT_NAMESPACE, "Product_7", &cached)
            .await
            .unwrap();

        let product = service(upstream, cache).get_product(7).await.unwrap();
        assert_eq!(product, cached);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_product().times(2).returning(|_| Ok(None));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        for _ in 0..2 {
            let err = service.get_product(100).await.unwrap_err();
            assert_eq!(err.to_string(), "Product with id 100 not found");
        }
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_hit_skips_upstream() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(Some(vec![record(2, "a"), record(1, "b")])));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        let first = service.list_products().await.unwrap();
        let second = service.list_products().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_cached() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_products().times(1).returning(|| Ok(Some(vec![])));

        let cache = Arc::new(InMemoryCacheStore::new());
        let err = service(upstream, cache.clone()).list_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::EmptyResult(_)));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_listing_and_single_entries_are_independent() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(Some(vec![record(1, "a")])));
        upstream
            .expect_fetch_product()
            .times(1)
            .returning(|id| Ok(Some(record(id, "a"))));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        service.list_products().await.unwrap();
        service.get_product(1).await.unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_mutations_leave_cache_untouched() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_product()
            .times(1)
            .returning(|id| Ok(Some(record(id, "electronics"))));
        upstream.expect_update_product().times(1).returning(|id, _| {
            Ok(Some(storefront_upstream::UpstreamProductRecord {
                id,
                title: "Renamed".to_string(),
                ..Default::default()
            }))
        });
        upstream
            .expect_delete_product()
            .times(1)
            .returning(|id| Ok(Some(record(id, "electronics"))));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        let before = service.get_product(1).await.unwrap();
        let payload = ProductPayload {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = service.update_product(1, payload).await.unwrap().unwrap();
        service.delete_product(1).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(service.get_product(1).await.unwrap(), before);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_uncached_reads_always_go_upstream() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_categories()
            .times(2)
            .returning(|| Ok(Some(vec!["electronics".to_string()])));
        upstream
            .expect_fetch_products_in_category()
            .times(2)
            .returning(|c| Ok(Some(vec![record(1, c)])));

        let cache = Arc::new(InMemoryCacheStore::new());
        let service = service(upstream, cache.clone());

        for _ in 0..2 {
            service.list_categories().await.unwrap();
            service.list_products_in_category("electronics").await.unwrap();
        }
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_ready_follows_cache_backend() {
        let up = service(MockUpstream::new(), Arc::new(InMemoryCacheStore::new()));
        assert!(up.check_ready().await.is_ok());

        let down =
            CachedProductServiceImpl::new(Arc::new(MockUpstream::new()), Arc::new(FailingCacheStore));
        assert!(matches!(down.check_ready().await, Err(CatalogError::Cache(_))));
    }

    #[tokio::test]
    async fn test_cache_errors_propagate() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_product().never();
        upstream.expect_fetch_products().never();

        let service = CachedProductServiceImpl::new(Arc::new(upstream), Arc::new(FailingCacheStore));

        assert!(matches!(
            service.get_product(1).await,
            Err(CatalogError::Cache(_))
        ));
        assert!(matches!(
            service.list_products().await,
            Err(CatalogError::Cache(_))
        ));
    }
}
