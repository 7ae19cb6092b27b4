//! # Storefront Security
//!
//! Bearer JWT verification with OAuth2-style scope authorities, the
//! declarative route permission table, and the client that asks the user
//! service whether a `token` header is valid.

pub mod jwt;
pub mod policy;
pub mod user_service;

pub use jwt::*;
pub use policy::*;
pub use user_service::*;
