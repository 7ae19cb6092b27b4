//! Main application router.

use crate::{
    controllers::{health_controller, product_controller},
    middleware::{access_control_middleware, logging_middleware, AccessControl},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use shaku::{HasComponent, Module};
use storefront_config::ServerConfig;
use storefront_security::TokenValidator;
use storefront_service::ProductCatalog;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router from a Shaku module.
pub fn create_router_from_module<M>(
    module: &M,
    access: AccessControl,
    server_config: &ServerConfig,
) -> Router
where
    M: Module + HasComponent<dyn ProductCatalog> + HasComponent<dyn TokenValidator>,
{
    create_router(AppState::from_module(module), access, server_config)
}

/// Creates the application router.
pub fn create_router(state: AppState, access: AccessControl, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    if !access.enabled {
        info!("Route access control is disabled");
    }

    let health_router = health_controller::router().with_state(state.clone());

    // route_layer runs after routing, so the middleware sees MatchedPath.
    let product_router = product_controller::router()
        .route_layer(middleware::from_fn_with_state(access, access_control_middleware))
        .with_state(state);

    let router = Router::new()
        .merge(health_router)
        .merge(product_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with product endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Storefront Catalog API"
}
