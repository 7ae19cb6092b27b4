//! JWT handling.

mod claims;
mod token_provider;

pub use claims::{Claims, OneOrMany};
pub use token_provider::TokenProvider;
