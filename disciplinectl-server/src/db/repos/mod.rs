//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Single-row writes use `RETURNING` to hand back the persisted record
//! - Lookups that may miss return `Option`, deletes return `bool`;
//!   handlers decide what a miss means
//! - Passwords are hashed before they reach SQL

pub mod actions;
pub mod incidents;
pub mod staff;
pub mod students;

pub use actions::{Action, ActionRepo};
pub use incidents::{Incident, IncidentRepo};
pub use staff::{StaffMember, StaffRepo};
pub use students::{Student, StudentRepo};

use crate::auth::PasswordError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Password(#[from] PasswordError),
}

impl DbError {
    /// A UNIQUE constraint rejected the write (duplicate username).
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::Database(e)) if e.is_unique_violation())
    }

    /// A FOREIGN KEY constraint rejected the write.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::Database(e)) if e.is_foreign_key_violation())
    }
}
