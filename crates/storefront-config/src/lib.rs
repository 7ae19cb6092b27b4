//! # Storefront Config
//!
//! Configuration management for the Storefront catalog service.
//! Supports layered configuration from files, environment variables,
//! and runtime refresh.

mod app_config;
mod cache_mode;
mod loader;

pub use app_config::*;
pub use cache_mode::*;
pub use loader::*;
