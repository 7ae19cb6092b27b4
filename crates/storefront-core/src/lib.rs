//! # Storefront Core
//!
//! Core types, domain model, and error definitions for the Storefront
//! catalog service. Every other crate in the workspace builds on the
//! error taxonomy and the `Product` model defined here.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
