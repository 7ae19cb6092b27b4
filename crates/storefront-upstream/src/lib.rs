//! # Storefront Upstream
//!
//! Wire types and HTTP client for the third-party product catalog API.
//! An empty or `null` response body is the only "missing" signal the client
//! reports; status codes are not interpreted.

pub mod dto;
pub mod fake_store_client;
pub mod traits;

pub use dto::*;
pub use fake_store_client::*;
pub use traits::*;
