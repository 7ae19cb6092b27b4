//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use storefront_security::TokenValidator;
use storefront_service::ProductCatalog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub token_validator: Arc<dyn TokenValidator>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        token_validator: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            catalog,
            token_validator,
        }
    }

    /// Resolves the services from a DI module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn ProductCatalog> + HasComponent<dyn TokenValidator>,
    {
        let catalog: Arc<dyn ProductCatalog> = module.resolve();
        let token_validator: Arc<dyn TokenValidator> = module.resolve();
        Self::new(catalog, token_validator)
    }
}
