//! API Middleware
//!
//! Authorization header extraction and request tracing for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::AuthorizationToken;
pub use request_id::request_id_middleware;
