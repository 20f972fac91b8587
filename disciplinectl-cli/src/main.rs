//! disciplinectl CLI - school discipline records server
//!
//! Entry point for the `disciplinectl` binary:
//! - `serve` runs the HTTP application
//! - `migrate` creates the schema in a database
//! - `staff add` / `student add` seed accounts with hashed passwords

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "disciplinectl",
    author,
    version,
    about = "School discipline management: staff, students, incidents and disciplinary actions"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create or update the database schema
    Migrate(commands::migrate::MigrateArgs),
    /// Manage staff accounts
    Staff(commands::accounts::StaffArgs),
    /// Manage student accounts
    Student(commands::accounts::StudentArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Staff(args) => commands::run_staff(args).await?,
        Commands::Student(args) => commands::run_student(args).await?,
    }
    Ok(())
}
