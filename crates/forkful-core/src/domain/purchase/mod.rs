//! Purchase domain
//!
//! One-time, irreversible access grants joining buyers to recipes.

pub mod entity;
pub mod repository;
pub mod service;

pub use entity::Purchase;
pub use repository::PurchaseRepository;
pub use service::PurchaseService;
