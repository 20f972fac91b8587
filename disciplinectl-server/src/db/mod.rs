//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Every repository call checks a connection out and returns it on drop
//! - Rely on DB constraints (unique usernames, foreign keys), surface conflicts
//! - Transactions for writes that must roll back as a unit

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
