//! Upstream client trait definitions.

use crate::dto::{ProductPayload, UpstreamProductRecord};
use async_trait::async_trait;
use storefront_core::{CatalogResult, Interface};

/// Access to the upstream product catalog.
///
/// Every method issues exactly one request. `Ok(None)` means the upstream
/// answered with an empty or `null` body.
#[async_trait]
pub trait ProductUpstream: Interface + Send + Sync {
    /// Fetches a single product record.
    async fn fetch_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>>;

    /// Fetches every product record.
    async fn fetch_products(&self) -> CatalogResult<Option<Vec<UpstreamProductRecord>>>;

    /// Fetches the list of category names.
    async fn fetch_categories(&self) -> CatalogResult<Option<Vec<String>>>;

    /// Fetches the product records in one category.
    async fn fetch_products_in_category(
        &self,
        category: &str,
    ) -> CatalogResult<Option<Vec<UpstreamProductRecord>>>;

    /// Overwrites a product (PUT) and returns the upstream's echo.
    async fn replace_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>>;

    /// Merges fields into a product (PATCH) and returns the upstream's echo.
    async fn update_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>>;

    /// Creates a product and returns the upstream's echo.
    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>>;

    /// Deletes a product and returns its last known state.
    async fn delete_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>>;
}
