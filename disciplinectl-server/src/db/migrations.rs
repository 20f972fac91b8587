//! Schema setup
//!
//! Every statement is `IF NOT EXISTS`, so running on each start is safe.

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Create all tables and indexes
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
