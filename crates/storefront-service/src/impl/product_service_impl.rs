//! Uncached product catalog.

use crate::mappers::{to_domain, to_domain_list};
use crate::product_service::ProductCatalog;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use storefront_core::{CatalogError, CatalogResult, Product};
use storefront_upstream::{ProductPayload, ProductUpstream};
use tracing::{debug, info};

/// Product catalog that goes to the upstream on every call.
#[derive(Component)]
#[shaku(interface = ProductCatalog)]
pub struct ProductServiceImpl {
    #[shaku(inject)]
    upstream: Arc<dyn ProductUpstream>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(upstream: Arc<dyn ProductUpstream>) -> Self {
        Self { upstream }
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductCatalog for ProductServiceImpl {
    async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        fetch_product(self.upstream.as_ref(), id).await
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        fetch_products(self.upstream.as_ref()).await
    }

    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        fetch_categories(self.upstream.as_ref()).await
    }

    async fn list_products_in_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        fetch_products_in_category(self.upstream.as_ref(), category).await
    }

    async fn replace_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<Product>> {
        replace_product(self.upstream.as_ref(), id, payload).await
    }

    async fn update_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<Product>> {
        update_product(self.upstream.as_ref(), id, payload).await
    }

    async fn create_product(&self, payload: ProductPayload) -> CatalogResult<Option<Product>> {
        create_product(self.upstream.as_ref(), payload).await
    }

    async fn delete_product(&self, id: i64) -> CatalogResult<Option<Product>> {
        delete_product(self.upstream.as_ref(), id).await
    }
}

// Upstream calls shared with the cached catalog.

pub(crate) async fn fetch_product(
    upstream: &dyn ProductUpstream,
    id: i64,
) -> CatalogResult<Product> {
    debug!("Fetching product: {}", id);

    upstream
        .fetch_product(id)
        .await?
        .map(to_domain)
        .ok_or(CatalogError::ProductNotFound(id))
}

pub(crate) async fn fetch_products(upstream: &dyn ProductUpstream) -> CatalogResult<Vec<Product>> {
    debug!("Fetching all products");

    let records = upstream
        .fetch_products()
        .await?
        .filter(|records| !records.is_empty())
        .ok_or_else(|| CatalogError::empty_result("No products found"))?;

    Ok(to_domain_list(records))
}

pub(crate) async fn fetch_categories(upstream: &dyn ProductUpstream) -> CatalogResult<Vec<String>> {
    debug!("Fetching categories");

    upstream
        .fetch_categories()
        .await?
        .filter(|categories| !categories.is_empty())
        .ok_or_else(|| CatalogError::empty_result("No categories found"))
}

pub(crate) async fn fetch_products_in_category(
    upstream: &dyn ProductUpstream,
    category: &str,
) -> CatalogResult<Vec<Product>> {
    debug!("Fetching products in category: {}", category);

    let records = upstream
        .fetch_products_in_category(category)
        .await?
        .filter(|records| !records.is_empty())
        .ok_or_else(|| {
            CatalogError::empty_result(format!("No products found for category {}", category))
        })?;

    Ok(to_domain_list(records))
}

pub(crate) async fn replace_product(
    upstream: &dyn ProductUpstream,
    id: i64,
    payload: ProductPayload,
) -> CatalogResult<Option<Product>> {
    debug!("Replacing product: {}", id);

    let product = upstream.replace_product(id, payload).await?.map(to_domain);
    log_mutation("replaced", id, product.as_ref());
    Ok(product)
}

pub(crate) async fn update_product(
    upstream: &dyn ProductUpstream,
    id: i64,
    payload: ProductPayload,
) -> CatalogResult<Option<Product>> {
    debug!("Updating product: {}", id);

    let product = upstream.update_product(id, payload).await?.map(to_domain);
    log_mutation("updated", id, product.as_ref());
    Ok(product)
}

pub(crate) async fn create_product(
    upstream: &dyn ProductUpstream,
    payload: ProductPayload,
) -> CatalogResult<Option<Product>> {
    debug!("Creating product: {:?}", payload.title);

    let product = upstream.create_product(payload).await?.map(to_domain);
    match &product {
        Some(p) => info!("Product created: {}", p.id),
        None => info!("Product create returned no body"),
    }
    Ok(product)
}

pub(crate) async fn delete_product(
    upstream: &dyn ProductUpstream,
    id: i64,
) -> CatalogResult<Option<Product>> {
    debug!("Deleting product: {}", id);

    let product = upstream.delete_product(id).await?.map(to_domain);
    log_mutation("deleted", id, product.as_ref());
    Ok(product)
}

fn log_mutation(action: &str, id: i64, product: Option<&Product>) {
    if product.is_some() {
        info!("Product {}: {}", action, id);
    } else {
        info!("Product {} returned no body: {}", action, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#impl::test_support::{record, MockUpstream};

    fn service(upstream: MockUpstream) -> ProductServiceImpl {
        ProductServiceImpl::new(Arc::new(upstream))
    }

    #[tokio::test]
    async fn test_get_product_returns_requested_id() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_product()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(record(id, "electronics"))));

        let product = service(upstream).get_product(1).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Product 1");
        assert_eq!(product.category.description, "electronics");
        assert_eq!(product.category.id, 0);
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_product().returning(|_| Ok(None));

        let err = service(upstream).get_product(100).await.unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(100)));
        assert_eq!(err.to_string(), "Product with id 100 not found");
    }

    #[tokio::test]
    async fn test_get_product_is_not_cached() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_product()
            .times(2)
            .returning(|id| Ok(Some(record(id, "jewelery"))));

        let service = service(upstream);
        service.get_product(2).await.unwrap();
        service.get_product(2).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_products_empty_result() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_products().times(1).returning(|| Ok(None));
        let err = service(upstream).list_products().await.unwrap_err();
        assert!(matches!(&err, CatalogError::EmptyResult(msg) if msg == "No products found"));

        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_products().times(1).returning(|| Ok(Some(vec![])));
        let err = service(upstream).list_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyResult(_)));
    }

    #[tokio::test]
    async fn test_list_products_keeps_order() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_products()
            .returning(|| Ok(Some(vec![record(5, "a"), record(2, "b"), record(9, "a")])));

        let ids: Vec<i64> = service(upstream)
            .list_products()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_categories()
            .returning(|| Ok(Some(vec!["electronics".to_string(), "jewelery".to_string()])));

        let categories = service(upstream).list_categories().await.unwrap();
        assert_eq!(categories, vec!["electronics", "jewelery"]);
    }

    #[tokio::test]
    async fn test_list_categories_empty_result() {
        let mut upstream = MockUpstream::new();
        upstream.expect_fetch_categories().returning(|| Ok(Some(vec![])));

        let err = service(upstream).list_categories().await.unwrap_err();
        assert_eq!(err.to_string(), "No categories found");
        assert_eq!(err.status_code(), 501);
    }

    #[tokio::test]
    async fn test_list_products_in_category() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_products_in_category()
            .withf(|category| category == "men's clothing")
            .returning(|_| Ok(Some(vec![record(3, "men's clothing")])));

        let products = service(upstream)
            .list_products_in_category("men's clothing")
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category.description, "men's clothing");
    }

    #[tokio::test]
    async fn test_list_products_in_category_empty_result() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_products_in_category()
            .returning(|_| Ok(None));

        let err = service(upstream)
            .list_products_in_category("toys")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No products found for category toys");
    }

    #[tokio::test]
    async fn test_mutations_translate_echo() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_replace_product()
            .returning(|id, _| Ok(Some(record(id, "electronics"))));
        upstream
            .expect_update_product()
            .withf(|id, payload| *id == 1 && payload.title.as_deref() == Some("Renamed"))
            .returning(|id, payload| {
                Ok(Some(storefront_upstream::UpstreamProductRecord {
                    id,
                    title: payload.title.unwrap_or_default(),
                    ..Default::default()
                }))
            });
        upstream
            .expect_create_product()
            .returning(|_| Ok(Some(record(21, "electronics"))));
        upstream
            .expect_delete_product()
            .returning(|id| Ok(Some(record(id, "electronics"))));

        let service = service(upstream);
        let payload = ProductPayload {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        assert_eq!(
            service.replace_product(4, ProductPayload::default()).await.unwrap().unwrap().id,
            4
        );
        assert_eq!(
            service.update_product(1, payload).await.unwrap().unwrap().title,
            "Renamed"
        );
        assert_eq!(
            service.create_product(ProductPayload::default()).await.unwrap().unwrap().id,
            21
        );
        assert_eq!(service.delete_product(6).await.unwrap().unwrap().id, 6);
    }

    #[tokio::test]
    async fn test_mutations_without_body_return_none() {
        let mut upstream = MockUpstream::new();
        upstream.expect_replace_product().returning(|_, _| Ok(None));
        upstream.expect_update_product().returning(|_, _| Ok(None));
        upstream.expect_create_product().returning(|_| Ok(None));
        upstream.expect_delete_product().returning(|_| Ok(None));

        let service = service(upstream);
        assert!(service.replace_product(1, ProductPayload::default()).await.unwrap().is_none());
        assert!(service.update_product(1, ProductPayload::default()).await.unwrap().is_none());
        assert!(service.create_product(ProductPayload::default()).await.unwrap().is_none());
        assert!(service.delete_product(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upstream_errors_propagate() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_fetch_product()
            .returning(|_| Err(CatalogError::upstream("connection refused")));
        upstream
            .expect_delete_product()
            .returning(|_| Err(CatalogError::Deserialization("eof".to_string())));

        let service = service(upstream);
        assert!(matches!(
            service.get_product(1).await,
            Err(CatalogError::UpstreamUnreachable(_))
        ));
        assert!(matches!(
            service.delete_product(1).await,
            Err(CatalogError::Deserialization(_))
        ));
    }
}
