//! Domain layer - Business logic and entities

pub mod catalog;
pub mod purchase;
pub mod recipe;
pub mod user;

// Re-export specific types to avoid naming conflicts
pub use catalog::{CatalogService, RecipeListing};
pub use purchase::{Purchase, PurchaseService};
pub use recipe::{AuthoredRecipe, Recipe, RecipeDraft, RecipeService, RecipeUpdate};
pub use user::User;
