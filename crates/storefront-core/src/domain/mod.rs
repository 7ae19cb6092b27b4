//! Domain model exposed by the catalog service.

mod product;

pub use product::*;
