//! Storage layer
//!
//! SQLite-backed persistence for Forkful: connection pool management and
//! versioned schema migrations.

pub mod database;
pub mod migrations;

pub use database::{Database, DatabaseConfig};
pub use migrations::{MigrationStatus, run_migrations};
