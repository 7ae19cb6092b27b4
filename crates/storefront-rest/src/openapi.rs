//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use storefront_core::{Category, ErrorResponse, Product};
use storefront_upstream::ProductPayload;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Storefront catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront Catalog API",
        version = "1.0.0",
        description = "Product catalog proxy with read-through caching",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::list_categories,
        crate::controllers::product_controller::list_products_in_category,
        crate::controllers::product_controller::replace_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::delete_product,
        crate::controllers::product_controller::get_product_with_token,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Product,
            Category,
            ProductPayload,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the bearer JWT and user-service token schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT carrying the ADMIN scope"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "user_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("token"))),
            );
        }
    }
}
