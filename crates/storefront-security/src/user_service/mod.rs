//! User-service token validation.

mod client;
mod dto;

pub use client::{TokenValidator, UserServiceClient, UserServiceClientParameters};
pub use dto::{Role, UserDetails};
