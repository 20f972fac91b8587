//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Optional static file directory under `/static`
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::auth::AuthConfig;
use crate::db::{ActionRepo, IncidentRepo, StaffRepo, StudentRepo};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Directory served under `/static` (stylesheets, images)
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            static_dir: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth: AuthConfig) -> Self {
        Self { pool, auth }
    }

    pub fn staff(&self) -> StaffRepo<'_> {
        StaffRepo::new(&self.pool, self.auth.hasher)
    }

    pub fn students(&self) -> StudentRepo<'_> {
        StudentRepo::new(&self.pool, self.auth.hasher)
    }

    pub fn incidents(&self) -> IncidentRepo<'_> {
        IncidentRepo::new(&self.pool)
    }

    pub fn actions(&self) -> ActionRepo<'_> {
        ActionRepo::new(&self.pool)
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::auth::router())
        .merge(routes::admin::router())
        .merge(routes::staff::router())
        .merge(routes::students::router())
        .merge(routes::student_portal::router())
        .merge(routes::principal::router())
        .merge(routes::faculty::router())
        .merge(routes::committee::router());

    if let Some(dir) = static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, AuthConfig::from_env(), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    pool: SqlitePool,
    auth: AuthConfig,
    config: ServerConfig,
) -> Result<(), ServerError> {
    if let Some(dir) = &config.static_dir {
        tracing::info!(static_dir = %dir.display(), "Serving static files");
    }
    let app = build_router(AppState::new(pool, auth), config.static_dir.as_deref());

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
