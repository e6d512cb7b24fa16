//! User domain
//!
//! Account entities and persistence. Credential issuance and session-token
//! validation live outside this crate; the entity only owns the token set.

pub mod entity;
pub mod repository;

pub use entity::User;
pub use repository::UserRepository;
