//! # Storefront REST
//!
//! REST API layer using Axum for the Storefront catalog service.
//! Provides the product endpoints, health checks and the OpenAPI document,
//! and is the single place where catalog errors become HTTP statuses.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
