//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered HTML pages and form posts
//! - Role checks on the caller's `user_id` parameter
//! - Request tracing
//! - Graceful shutdown
//! - HTML error pages

pub mod error;
pub mod extractors;
pub mod guard;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
