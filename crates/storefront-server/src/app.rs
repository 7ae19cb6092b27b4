//! Application builder.

use crate::di::{build_direct_module, build_memory_module, build_redis_module};
use crate::startup::{print_banner, print_startup_info};
use axum::Router;
use std::future::Future;
use storefront_config::{AppConfig, CacheMode};
use storefront_core::{CatalogError, CatalogResult};
use storefront_rest::{create_router_from_module, middleware::AccessControl};
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Wires the catalog for the configured cache mode and returns the router.
    pub async fn build_router(&self) -> CatalogResult<Router> {
        let config = self.config.clone().unwrap_or_default();
        build_router(&config).await
    }

    /// Builds the router and serves it until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> CatalogResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let config = self.config.unwrap_or_default();
        let router = build_router(&config).await?;

        print_banner();

        let addr = config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&addr, config.catalog.cache);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the DI module matching `config.catalog.cache` and the router over it.
pub async fn build_router(config: &AppConfig) -> CatalogResult<Router> {
    let access = AccessControl::from_config(&config.security);

    let router = match config.catalog.cache {
        CacheMode::Redis => {
            let module = build_redis_module(config).await?;
            create_router_from_module(&*module, access, &config.server)
        }
        CacheMode::Memory => {
            let module = build_memory_module(config)?;
            create_router_from_module(&*module, access, &config.server)
        }
        CacheMode::Disabled => {
            let module = build_direct_module(config)?;
            create_router_from_module(&*module, access, &config.server)
        }
    };

    info!("Catalog cache mode: {}", config.catalog.cache);
    Ok(router)
}
