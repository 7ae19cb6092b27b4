//! Cache namespaces and key generators.

/// Hash holding one entry per product id.
pub const PRODUCT_NAMESPACE: &str = "ProductId";

/// Hash holding the full product listing.
pub const CATALOG_NAMESPACE: &str = "Products";

/// Key of the full product listing inside [`CATALOG_NAMESPACE`].
pub const ALL_PRODUCTS_KEY: &str = "AllProducts";

/// Generate the key for a single product inside [`PRODUCT_NAMESPACE`].
#[must_use]
pub fn product_by_id(id: i64) -> String {
    format!("Product_{}", id)
}
