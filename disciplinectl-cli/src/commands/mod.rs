//! Command implementations for disciplinectl CLI

pub mod accounts;
pub mod migrate;
pub mod serve;

pub use accounts::{run_staff, run_student};
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Default database when neither `--database-url` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "sqlite://discipline.db";
