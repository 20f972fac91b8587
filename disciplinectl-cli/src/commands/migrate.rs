//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use disciplinectl_server::db::{create_pool, migrations};

use super::DEFAULT_DATABASE_URL;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to apply database schema")?;

    pool.close().await;
    println!("Schema is up to date ({})", args.database_url);
    Ok(())
}
