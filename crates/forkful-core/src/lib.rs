//! Forkful Core Library
//!
//! This crate provides the core functionality for the Forkful recipe
//! marketplace, including:
//! - Catalog queries (visibility filtering, search classification,
//!   valuation ranking, pagination)
//! - Mutation authorization (author-only updates and deletes)
//! - Purchases (one-time access grants with duplicate guards)
//! - Storage (SQLite with versioned migrations)
//!
//! Transport, session-token validation, and password hashing live outside
//! this crate.

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::catalog::{CatalogService, PAGE_SIZE, RecipeListing};
    pub use crate::domain::purchase::{Purchase, PurchaseService};
    pub use crate::domain::recipe::{Recipe, RecipeDraft, RecipeService, RecipeUpdate};
    pub use crate::domain::user::User;
    pub use crate::error::{Error, Result};
    pub use crate::storage::Database;
}
