//! HTTP middleware.

mod access_control;
mod logging;

pub use access_control::{access_control_middleware, AccessControl, AuthorizedSubject};
pub use logging::logging_middleware;
