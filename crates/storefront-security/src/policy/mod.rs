//! Declarative route permissions.

mod route_policy;

pub use route_policy::{RoutePolicy, RouteRule};
