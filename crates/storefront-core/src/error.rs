//! Unified error types for all layers of the catalog service.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Resolution hint attached to empty-result responses.
pub const EMPTY_RESULT_RESOLUTION: &str = "Please check the code for null values";

/// Unified error type for the catalog service.
///
/// The service layer returns these unchanged; the REST layer is the only
/// place that turns a variant into a status code and body.
#[derive(Error, Debug)]
pub enum CatalogError {
    // ============ Catalog Errors ============
    /// Upstream returned no body for a single-product fetch.
    #[error("Product with id {0} not found")]
    ProductNotFound(i64),

    /// Upstream returned null or an empty list for a list fetch.
    #[error("{0}")]
    EmptyResult(String),

    // ============ Authentication/Authorization Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // ============ Infrastructure Errors ============
    /// Upstream could not be reached or the transfer failed.
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// A response or cached value could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ProductNotFound(_) => 404,
            Self::EmptyResult(_) => 501,
            Self::Unauthorized(_) | Self::InvalidToken(_) => 401,
            Self::Forbidden(_) => 403,
            Self::UpstreamUnreachable(_)
            | Self::Deserialization(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            Self::EmptyResult(_) => "EMPTY_RESULT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::UpstreamUnreachable(_) => "UPSTREAM_UNREACHABLE",
            Self::Deserialization(_) => "DESERIALIZATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an empty-result error.
    #[must_use]
    pub fn empty_result<T: Into<String>>(message: T) -> Self {
        Self::EmptyResult(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an upstream transport error.
    #[must_use]
    pub fn upstream<T: ToString>(err: T) -> Self {
        Self::UpstreamUnreachable(err.to_string())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the resolution hint shown to API clients, if any.
    #[must_use]
    pub const fn resolution(&self) -> Option<&'static str> {
        match self {
            Self::EmptyResult(_) => Some(EMPTY_RESULT_RESOLUTION),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggested resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `CatalogError`.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            resolution: error.resolution().map(str::to_string),
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        Self::from_error(error)
    }
}
