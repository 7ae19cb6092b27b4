//! # Storefront Server Library
//!
//! Dependency injection wiring, router assembly, and startup helpers
//! for the catalog server binary.

pub mod app;
pub mod di;
pub mod startup;
