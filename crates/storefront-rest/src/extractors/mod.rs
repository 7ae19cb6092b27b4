//! Custom Axum extractors.

mod user_token;

pub use user_token::*;
