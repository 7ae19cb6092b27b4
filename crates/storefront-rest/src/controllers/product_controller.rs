//! Product catalog controller.

use crate::{
    extractors::UserToken,
    responses::{created_or_no_content, ok, ok_or_no_content, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};
use storefront_core::{ErrorResponse, Product};
use storefront_upstream::ProductPayload;
use tracing::debug;

/// Creates the product router.
///
/// Routes carry their full paths so the access-control layer sees
/// `/products/:id` as the matched template.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route(
            "/products/categories/:category",
            get(list_products_in_category),
        )
        .route("/products/auth/:id", get(get_product_with_token))
        .route(
            "/products/:id",
            get(get_product)
                .put(replace_product)
                .patch(update_product)
                .delete(delete_product),
        )
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Token lacks SCOPE_ADMIN", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Product> {
    debug!("Get product request: {}", id);

    let product = state.catalog.get_product(id).await?;
    ok(product)
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 501, description = "Upstream returned no products", body = ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    debug!("List products request");

    let products = state.catalog.list_products().await?;
    ok(products)
}

/// List all category names.
#[utoipa::path(
    get,
    path = "/products/categories",
    tag = "products",
    responses(
        (status = 200, description = "All categories", body = [String]),
        (status = 501, description = "Upstream returned no categories", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    debug!("List categories request");

    let categories = state.catalog.list_categories().await?;
    ok(categories)
}

/// List the products in a category.
#[utoipa::path(
    get,
    path = "/products/categories/{category}",
    tag = "products",
    params(("category" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Products in the category", body = [Product]),
        (status = 501, description = "Upstream returned no products", body = ErrorResponse)
    )
)]
pub async fn list_products_in_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Vec<Product>> {
    debug!("List products in category request: {}", category);

    let products = state.catalog.list_products_in_category(&category).await?;
    ok(products)
}

/// Replace a product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 204, description = "Upstream returned no product")
    ),
    security(("bearer_auth" = []))
)]
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, AppError> {
    debug!("Replace product request: {}", id);

    let product = state.catalog.replace_product(id, payload).await?;
    Ok(ok_or_no_content(product))
}

/// Partially update a product.
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 204, description = "Upstream returned no product")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, AppError> {
    debug!("Update product request: {}", id);

    let product = state.catalog.update_product(id, payload).await?;
    Ok(ok_or_no_content(product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 204, description = "Upstream returned no product")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, AppError> {
    debug!("Create product request");

    let product = state.catalog.create_product(payload).await?;
    Ok(created_or_no_content(product))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted, last state returned", body = Product),
        (status = 204, description = "Upstream returned no product")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    debug!("Delete product request: {}", id);

    let product = state.catalog.delete_product(id).await?;
    Ok(ok_or_no_content(product))
}

/// Get a product after the user service accepts the `token` header.
#[utoipa::path(
    get,
    path = "/products/auth/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product ID"),
        ("token" = String, Header, description = "User-service token")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Token missing or rejected", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product_with_token(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    UserToken(token): UserToken,
) -> ApiResult<Product> {
    debug!("Get product with token request: {}", id);

    state.token_validator.validate_token(&token).await?;

    let product = state.catalog.get_product(id).await?;
    ok(product)
}
