//! HTTP client for the Fake Store product API.

use crate::dto::{ProductPayload, UpstreamProductRecord};
use crate::traits::ProductUpstream;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shaku::Component;
use storefront_config::UpstreamConfig;
use storefront_core::{CatalogError, CatalogResult};
use tracing::debug;
use url::Url;

/// HTTP client for the upstream product catalog.
///
/// Each trait method maps to one request under `{base_url}/products`. The
/// response status is logged but never used to decide the outcome.
#[derive(Component)]
#[shaku(interface = ProductUpstream)]
pub struct FakeStoreClient {
    client: Client,
    base_url: String,
}

impl FakeStoreClient {
    /// Creates a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> CatalogResult<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            CatalogError::Configuration(format!(
                "Invalid upstream base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Converts the client into DI component parameters.
    #[must_use]
    pub fn into_parameters(self) -> FakeStoreClientParameters {
        FakeStoreClientParameters {
            client: self.client,
            base_url: self.base_url,
        }
    }

    /// Builds `{base_url}/products/{segments...}` with each segment encoded.
    fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CatalogError::Configuration(format!("Invalid upstream base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::Configuration(format!(
                    "Upstream base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("products")
            .extend(segments);

        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> CatalogResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!(method = %method, url = %url, "Calling upstream");
        Ok(self.client.request(method, url))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> CatalogResult<Option<T>> {
        let response = request.send().await.map_err(CatalogError::upstream)?;
        let status = response.status();
        let body = response.text().await.map_err(CatalogError::upstream)?;

        debug!(status = %status.as_u16(), bytes = body.len(), "Upstream responded");
        decode_body(&body)
    }
}

impl std::fmt::Debug for FakeStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeStoreClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductUpstream for FakeStoreClient {
    async fn fetch_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>> {
        let id = id.to_string();
        self.execute(self.request(Method::GET, &[&id])?).await
    }

    async fn fetch_products(&self) -> CatalogResult<Option<Vec<UpstreamProductRecord>>> {
        self.execute(self.request(Method::GET, &[])?).await
    }

    async fn fetch_categories(&self) -> CatalogResult<Option<Vec<String>>> {
        self.execute(self.request(Method::GET, &["categories"])?).await
    }

    async fn fetch_products_in_category(
        &self,
        category: &str,
    ) -> CatalogResult<Option<Vec<UpstreamProductRecord>>> {
        self.execute(self.request(Method::GET, &["category", category])?)
            .await
    }

    async fn replace_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>> {
        let id = id.to_string();
        let request = self.request(Method::PUT, &[&id])?.json(&payload);
        self.execute(request).await
    }

    async fn update_product(
        &self,
        id: i64,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>> {
        let id = id.to_string();
        let request = self.request(Method::PATCH, &[&id])?.json(&payload);
        self.execute(request).await
    }

    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> CatalogResult<Option<UpstreamProductRecord>> {
        let request = self.request(Method::POST, &[])?.json(&payload);
        self.execute(request).await
    }

    async fn delete_product(&self, id: i64) -> CatalogResult<Option<UpstreamProductRecord>> {
        let id = id.to_string();
        self.execute(self.request(Method::DELETE, &[&id])?).await
    }
}

/// Decodes an upstream body, treating empty and `null` bodies as absent.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> CatalogResult<Option<T>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<T>>(body)
        .map_err(|e| CatalogError::Deserialization(format!("Invalid upstream body: {}", e)))
}
