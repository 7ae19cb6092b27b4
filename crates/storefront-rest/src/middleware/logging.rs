//! Request logging middleware.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use super::AuthorizedSubject;
use std::time::Instant;
use tracing::info;

/// Request logging middleware.
///
/// Logs the matched route template and, for guarded routes, the token
/// subject that access control let through.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string());
    let start = Instant::now();

    let response = next.run(request).await;
    let subject = response
        .extensions()
        .get::<AuthorizedSubject>()
        .map_or("-", |subject| subject.0.as_str());

    info!(
        target: "http",
        method = %method,
        uri = %uri,
        route = route.as_deref().unwrap_or("-"),
        subject = subject,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        "HTTP request completed"
    );

    response
}
