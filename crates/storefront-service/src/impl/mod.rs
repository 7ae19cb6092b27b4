//! Product catalog implementations.
//!
//! The trait lives in `product_service.rs`. Both implementations share the
//! upstream calls in `product_service_impl`; the cached one adds the
//! read-through steps for single products and the full listing.

pub mod cached_product_service_impl;
pub mod product_service_impl;

pub use cached_product_service_impl::CachedProductServiceImpl;
pub use product_service_impl::ProductServiceImpl;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use mockall::mock;
    use storefront_core::CatalogResult;
    use storefront_upstream::{ProductPayload, ProductUpstream, UpstreamProductRecord};

    mock! {
        pub Upstream {}

        #[async_trait]
        impl ProductUpstream for Upstream {
            async fn fetch_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>>;
            async fn fetch_products(&self) -> CatalogResult<Option<Vec<UpstreamProductRecord>>>;
            async fn fetch_categories(&self) -> CatalogResult<Option<Vec<String>>>;
            async fn fetch_products_in_category(
                &self,
                category: &str,
            ) -> CatalogResult<Option<Vec<UpstreamProductRecord>>>;
            async fn replace_product(
                &self,
                id: i64,
                payload: ProductPayload,
            ) -> CatalogResult<Option<UpstreamProductRecord>>;
            async fn update_product(
                &self,
                id: i64,
                payload: ProductPayload,
            ) -> CatalogResult<Option<UpstreamProductRecord>>;
            async fn create_product(
                &self,
                payload: ProductPayload,
            ) -> CatalogResult<Option<UpstreamProductRecord>>;
            async fn delete_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>>;
        }
    }

    pub(crate) fn record(id: i64, category: &str) -> UpstreamProductRecord {
        UpstreamProductRecord {
            id,
            title: format!("Product {}", id),
            description: format!("Product {} Description", id),
            price: 100.0,
            image: format!("https://fakestoreapi.com/img/{}.jpg", id),
            category: category.to_string(),
        }
    }
}
