//! Product catalog trait definition.

use async_trait::async_trait;
use storefront_core::{CatalogResult, Interface, Product};
use storefront_upstream::ProductPayload;

/// Product catalog service trait.
///
/// Mutations return `Ok(None)` when the upstream answers without a body;
/// the caller decides how to surface that.
#[async_trait]
pub trait ProductCatalog: Interface + Send + Sync {
    /// Gets a product by ID.
    async fn get_product(&self, id: i64) -> CatalogResult<Product>;

    /// Lists every product in upstream order.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Lists the category names.
    async fn list_categories(&self) -> CatalogResult<Vec<String>>;

    /// Lists the products in one category.
    async fn list_products_in_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Replaces a product.
    async fn replace_product(&self, id: i64, payload: ProductPayload)
        -> CatalogResult<Option<Product>>;

    /// Partially updates a product.
    async fn update_product(&self, id: i64, payload: ProductPayload)
        -> CatalogResult<Option<Product>>;

    /// Creates a product.
    async fn create_product(&self, payload: ProductPayload) -> CatalogResult<Option<Product>>;

    /// Deletes a product.
    async fn delete_product(&self, id: i64) -> CatalogResult<Option<Product>>;

    /// Checks that the backing stores can serve requests.
    async fn check_ready(&self) -> CatalogResult<()> {
        Ok(())
    }
}
