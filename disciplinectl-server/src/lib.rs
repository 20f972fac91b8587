//! disciplinectl-server: school discipline records over HTTP
//!
//! Staff and students sign in, faculty report discipline incidents,
//! committee members assign disciplinary actions, and the principal
//! reviews them. Pages are rendered server-side; every mutation is a
//! url-encoded form post answered with a 303 redirect.

pub mod auth;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use auth::{AuthConfig, PasswordHasher};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
