//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use disciplinectl_server::db::{create_pool, migrations};
use disciplinectl_server::{run_server, AuthConfig, ServerConfig};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Directory served under /static
    #[arg(long, env = "DISCIPLINE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting disciplinectl server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to apply database schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir,
    };

    // Blocks until shutdown
    run_server(pool, AuthConfig::from_env(), config)
        .await
        .context("Server error")?;

    Ok(())
}
