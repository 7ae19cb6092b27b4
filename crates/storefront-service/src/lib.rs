//! # Storefront Service
//!
//! Product catalog service layer. Translates upstream records into domain
//! products and, in the cached variant, serves single-product and
//! full-catalog reads from a cache store before going upstream.

pub mod cache;
pub mod mappers;
pub mod product_service;
pub mod r#impl;

pub use cache::*;
pub use product_service::*;
pub use r#impl::*;
