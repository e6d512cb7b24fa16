//! Recipe domain
//!
//! Recipe entities, persistence, and the mutation authorization guard.

pub mod entity;
pub mod repository;
pub mod service;

pub use entity::{AuthoredRecipe, Ingredient, Recipe, RecipeDraft, RecipeUpdate, Step};
pub use repository::RecipeRepository;
pub use service::RecipeService;
