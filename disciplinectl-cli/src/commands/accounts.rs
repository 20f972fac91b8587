//! Account seeding: `staff add` and `student add`
//!
//! The web UI has no self-registration, so the first principal or faculty
//! account usually comes from here.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use sqlx::SqlitePool;

use disciplinectl_server::db::{create_pool, migrations, StaffRepo, StudentRepo};
use disciplinectl_server::models::{NewStaffMember, NewStudent};
use disciplinectl_server::AuthConfig;

use super::DEFAULT_DATABASE_URL;

#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

#[derive(Args, Debug)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommands,
}

#[derive(Subcommand, Debug)]
pub enum StaffCommands {
    /// Add a staff member
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Login name (unique among staff)
        #[arg(long)]
        username: String,

        /// Initial password (stored hashed)
        #[arg(long)]
        password: String,

        /// Role: principal, faculty or committee
        #[arg(long)]
        role: String,

        #[command(flatten)]
        db: DatabaseArgs,
    },
}

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: StudentCommands,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Login name (unique among students)
        #[arg(long)]
        username: String,

        /// Initial password (stored hashed)
        #[arg(long)]
        password: String,

        #[command(flatten)]
        db: DatabaseArgs,
    },
}

async fn open(db: &DatabaseArgs) -> Result<SqlitePool> {
    let pool = create_pool(&db.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", db.database_url))?;
    migrations::run(&pool)
        .await
        .context("Failed to apply database schema")?;
    Ok(pool)
}

pub async fn run_staff(args: StaffArgs) -> Result<()> {
    match args.command {
        StaffCommands::Add {
            name,
            username,
            password,
            role,
            db,
        } => {
            let new = NewStaffMember::new(&name, &username, &password, &role)?;
            let pool = open(&db).await?;
            let auth = AuthConfig::from_env();

            let staff = StaffRepo::new(&pool, auth.hasher)
                .create(&new)
                .await
                .with_context(|| format!("Failed to add staff member {username}"))?;

            pool.close().await;
            tracing::info!(id = staff.id, role = %staff.role, "Staff member added");
            println!("Added {} {} (id {})", staff.role.label(), staff.username, staff.id);
        }
    }
    Ok(())
}

pub async fn run_student(args: StudentArgs) -> Result<()> {
    match args.command {
        StudentCommands::Add {
            name,
            username,
            password,
            db,
        } => {
            let new = NewStudent::new(&name, &username, &password)?;
            let pool = open(&db).await?;
            let auth = AuthConfig::from_env();

            let student = StudentRepo::new(&pool, auth.hasher)
                .create(&new)
                .await
                .with_context(|| format!("Failed to add student {username}"))?;

            pool.close().await;
            tracing::info!(id = student.id, "Student added");
            println!("Added student {} (id {})", student.username, student.id);
        }
    }
    Ok(())
}
