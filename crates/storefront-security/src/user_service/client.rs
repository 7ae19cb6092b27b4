//! HTTP client for the user service's token validation endpoint.

use super::UserDetails;
use async_trait::async_trait;
use reqwest::Client;
use shaku::Component;
use storefront_config::SecurityConfig;
use storefront_core::{CatalogError, CatalogResult, Interface};
use tracing::{debug, warn};
use url::Url;

/// Validates opaque tokens issued by the user service.
#[async_trait]
pub trait TokenValidator: Interface + Send + Sync {
    /// Validates `token`.
    ///
    /// Any rejection, including an unreachable user service, is
    /// `Unauthorized`. A 2xx answer without a body yields `Ok(None)`.
    async fn validate_token(&self, token: &str) -> CatalogResult<Option<UserDetails>>;
}

/// Calls `GET {user_service_url}/user/validate/{token}`.
#[derive(Component)]
#[shaku(interface = TokenValidator)]
pub struct UserServiceClient {
    client: Client,
    base_url: String,
}

impl UserServiceClient {
    /// Creates a client from security configuration.
    pub fn new(config: &SecurityConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.user_service_timeout())
            .build()
            .map_err(|e| CatalogError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.user_service_url))
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
    pub fn into_parameters(self) -> UserServiceClientParameters {
        UserServiceClientParameters {
            client: self.client,
            base_url: self.base_url,
        }
    }

    fn validate_url(&self, token: &str) -> CatalogResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CatalogError::Configuration(format!("Invalid user service URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::Configuration(format!(
                    "User service URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["user", "validate", token]);

        Ok(url)
    }
}

impl std::fmt::Debug for UserServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenValidator for UserServiceClient {
    async fn validate_token(&self, token: &str) -> CatalogResult<Option<UserDetails>> {
        if token.trim().is_empty() {
            return Err(CatalogError::unauthorized("Missing token"));
        }

        let url = self.validate_url(token)?;
        debug!("Validating token with user service at {}", self.base_url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("User service unreachable: {}", e);
            CatalogError::unauthorized(format!("User service unreachable: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("User service rejected token with status {}", status.as_u16());
            return Err(CatalogError::unauthorized(format!(
                "Token rejected by user service ({})",
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            CatalogError::unauthorized(format!("Failed to read user service response: {}", e))
        })?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<UserDetails>>(&body).map_err(|e| {
            CatalogError::Deserialization(format!("Invalid user service body: {}", e))
        })
    }
}
