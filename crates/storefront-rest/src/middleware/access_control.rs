//! Bearer-token access control driven by the route permission table.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use storefront_config::SecurityConfig;
use storefront_security::{RoutePolicy, TokenProvider};
use tracing::debug;

/// Access control middleware state.
#[derive(Clone)]
pub struct AccessControl {
    pub enabled: bool,
    pub policy: Arc<RoutePolicy>,
    pub token_provider: Arc<TokenProvider>,
}

impl AccessControl {
    /// Builds the access control from security configuration.
    #[must_use]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            enabled: config.enabled,
            policy: Arc::new(RoutePolicy::from_config(config)),
            token_provider: Arc::new(TokenProvider::new(config)),
        }
    }

    /// Access control that lets every request through.
    #[must_use]
    pub fn disabled() -> Self {
        let config = SecurityConfig {
            enabled: false,
            ..Default::default()
        };
        Self::from_config(&config)
    }
}

/// Subject of the bearer token that passed access control.
///
/// Added to the response extensions so outer layers can log who made the
/// call after the request itself has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedSubject(pub String);

/// Enforces the route permission table.
///
/// Must be installed with `route_layer` so the matched route template is
/// known. Routes without a rule pass untouched. Guarded routes need a valid
/// `Authorization: Bearer` token (401 otherwise) carrying the rule's
/// authority (403 otherwise). Verified claims are added to the request
/// extensions and their subject to the response extensions.
pub async fn access_control_middleware(
    State(access): State<AccessControl>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !access.enabled {
        return Ok(next.run(request).await);
    }

    let method = request.method().as_str().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path().to_string(), |path| path.as_str().to_string());

    if access.policy.required_authority(&method, &route).is_none() {
        return Ok(next.run(request).await);
    }

    let claims = bearer_token(request.headers())
        .map(|token| access.token_provider.validate_token(token))
        .transpose()?;

    access.policy.authorize(&method, &route, claims.as_ref())?;

    let subject = claims.map(|claims| {
        debug!("Authorized {} {} for subject {}", method, route, claims.sub);
        let subject = AuthorizedSubject(claims.sub.clone());
        request.extensions_mut().insert(claims);
        subject
    });

    let mut response = next.run(request).await;
    if let Some(subject) = subject {
        response.extensions_mut().insert(subject);
    }
    Ok(response)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
