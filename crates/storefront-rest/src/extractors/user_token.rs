//! Extractor for the user-service `token` header.

use crate::responses::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use storefront_core::CatalogError;

/// Header carrying the opaque user-service token.
pub const TOKEN_HEADER: &str = "token";

/// Raw value of the `token` header.
///
/// Rejects with 401 when the header is missing, blank or not valid text.
#[derive(Debug, Clone)]
pub struct UserToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Self(token.to_string()))
            .ok_or_else(|| AppError(CatalogError::unauthorized("Missing token header")))
    }
}
