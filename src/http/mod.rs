//! HTTP plumbing shared by all services.

pub(crate) mod extract;

mod problem;
pub use problem::Problem;

/// The response body type used by the server.
pub type Body = axum::body::Body;
