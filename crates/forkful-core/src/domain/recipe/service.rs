//! Recipe service: publication and the mutation authorization guard
//!
//! Update and delete are author-only; the author field is always taken from
//! the authenticated identity, never from caller input.

use super::entity::{Recipe, RecipeDraft, RecipeUpdate};
use super::repository::RecipeRepository;
use crate::domain::user::UserRepository;
use crate::error::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Service for recipe publication and authorized mutation
#[derive(Debug, Clone)]
pub struct RecipeService {
    recipes: RecipeRepository,
    users: UserRepository,
}

impl RecipeService {
    /// Create a new recipe service
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            recipes: RecipeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Get the underlying recipe repository
    pub fn repository(&self) -> &RecipeRepository {
        &self.recipes
    }

    /// Publish a new recipe owned by the acting user
    pub async fn create_recipe(&self, author_id: Uuid, draft: RecipeDraft) -> Result<Recipe> {
        self.users.require(author_id).await?;

        let recipe = Recipe::from_draft(author_id, draft)?;
        self.recipes.create(&recipe).await?;

        tracing::info!(recipe_id = %recipe.id, author_id = %author_id, "Published recipe");
        Ok(recipe)
    }

    /// Load a recipe and check that the acting user is its author
    ///
    /// Fails with `RecipeNotFound` when the recipe is absent and `NotAuthor`
    /// when identities mismatch.
    pub async fn authorize_mutation(&self, recipe_id: Uuid, acting_user: Uuid) -> Result<Recipe> {
        let recipe = self
            .recipes
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| Error::RecipeNotFound(recipe_id.to_string()))?;

        if recipe.author_id != acting_user {
            return Err(Error::NotAuthor);
        }
        Ok(recipe)
    }

    /// Apply a typed update to a recipe, all fields or none
    ///
    /// An update with no fields set fails with `InvalidUpdate` before
    /// anything is touched; invariant violations roll the whole update back.
    pub async fn update_recipe(
        &self,
        recipe_id: Uuid,
        acting_user: Uuid,
        update: RecipeUpdate,
    ) -> Result<Recipe> {
        if update.is_empty() {
            return Err(Error::InvalidUpdate(
                "No updatable fields provided".to_string(),
            ));
        }

        let mut recipe = self.authorize_mutation(recipe_id, acting_user).await?;
        update.apply(&mut recipe);
        self.recipes.update(&recipe).await?;

        tracing::info!(recipe_id = %recipe_id, "Updated recipe");
        Ok(recipe)
    }

    /// Delete a recipe and all purchases referencing it
    pub async fn delete_recipe(&self, recipe_id: Uuid, acting_user: Uuid) -> Result<Recipe> {
        self.authorize_mutation(recipe_id, acting_user).await?;
        self.recipes.delete(recipe_id).await
    }
}
