//! Purchase service
//!
//! Records purchases with ownership and duplicate guards, and lists a
//! buyer's owned recipes.

use super::entity::Purchase;
use super::repository::PurchaseRepository;
use crate::domain::catalog::RecipeListing;
use crate::domain::recipe::RecipeRepository;
use crate::domain::user::UserRepository;
use crate::error::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Service for recording and listing purchases
#[derive(Debug, Clone)]
pub struct PurchaseService {
    purchases: PurchaseRepository,
    recipes: RecipeRepository,
    users: UserRepository,
}

impl PurchaseService {
    /// Create a new purchase service
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            purchases: PurchaseRepository::new(pool.clone()),
            recipes: RecipeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Record a one-time purchase of a recipe by a buyer
    ///
    /// Rejects unknown buyers and recipes, self-purchase of an authored
    /// recipe (`AlreadyOwned`), and repeat purchases (`AlreadyPurchased`).
    pub async fn record_purchase(&self, buyer_id: Uuid, recipe_id: Uuid) -> Result<Purchase> {
        self.users.require(buyer_id).await?;

        let recipe = self
            .recipes
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| Error::RecipeNotFound(recipe_id.to_string()))?;

        if recipe.author_id == buyer_id {
            return Err(Error::AlreadyOwned(recipe_id.to_string()));
        }
        if self.purchases.exists(buyer_id, recipe_id).await? {
            return Err(Error::AlreadyPurchased(recipe_id.to_string()));
        }

        let purchase = Purchase::new(recipe_id, buyer_id);
        self.purchases.create(&purchase).await?;

        tracing::info!(
            purchase_id = %purchase.id,
            recipe_id = %recipe_id,
            buyer_id = %buyer_id,
            "Recorded purchase"
        );
        Ok(purchase)
    }

    /// All recipes the buyer has purchased, most recent purchase first
    pub async fn list_purchased(&self, buyer_id: Uuid) -> Result<RecipeListing> {
        self.users.require(buyer_id).await?;

        let items = self.recipes.list_purchased_by(buyer_id).await?;
        let total_count = items.len();
        Ok(RecipeListing { items, total_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entity::{Recipe, RecipeDraft};
    use crate::domain::user::User;
    use crate::storage::Database;

    async fn create_test_db() -> SqlitePool {
        let db = Database::in_memory()
            .await
            .expect("Failed to create test database");
        db.pool().clone()
    }

    async fn create_test_user(pool: &SqlitePool, name: &str, email: &str) -> User {
        let user = User::new(name, email, "hash", "+34600000000").unwrap();
        UserRepository::new(pool.clone()).create(&user).await.unwrap();
        user
    }

    async fn create_test_recipe(pool: &SqlitePool, author: Uuid, title: &str) -> Recipe {
        let recipe = Recipe::from_draft(
            author,
            RecipeDraft {
                title: title.to_string(),
                description: format!("How to make {}", title),
                images: vec![],
                ingredients: vec![],
                steps: vec![],
                price: 2.5,
            },
        )
        .unwrap();
        RecipeRepository::new(pool.clone()).create(&recipe).await.unwrap();
        recipe
    }

    #[tokio::test]
    async fn test_purchase_then_list() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let ana = create_test_user(&pool, "Ana", "ana@example.com").await;
        let bea = create_test_user(&pool, "Bea", "bea@example.com").await;
        let recipe = create_test_recipe(&pool, ana.id, "Flan").await;

        let purchase = service.record_purchase(bea.id, recipe.id).await.unwrap();
        assert_eq!(purchase.recipe_id, recipe.id);
        assert_eq!(purchase.user_id, bea.id);

        let owned = service.list_purchased(bea.id).await.unwrap();
        assert_eq!(owned.total_count, 1);
        assert_eq!(owned.items[0].recipe.id, recipe.id);
        assert_eq!(owned.items[0].author_name, "Ana");
    }

    #[tokio::test]
    async fn test_self_purchase_rejected() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let ana = create_test_user(&pool, "Ana", "ana@example.com").await;
        let recipe = create_test_recipe(&pool, ana.id, "Flan").await;

        let result = service.record_purchase(ana.id, recipe.id).await;
        assert!(matches!(result, Err(Error::AlreadyOwned(_))));
    }

    #[tokio::test]
    async fn test_repeat_purchase_rejected() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let ana = create_test_user(&pool, "Ana", "ana@example.com").await;
        let bea = create_test_user(&pool, "Bea", "bea@example.com").await;
        let recipe = create_test_recipe(&pool, ana.id, "Flan").await;

        service.record_purchase(bea.id, recipe.id).await.unwrap();
        let result = service.record_purchase(bea.id, recipe.id).await;
        assert!(matches!(result, Err(Error::AlreadyPurchased(_))));
    }

    #[tokio::test]
    async fn test_purchase_of_missing_recipe() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let bea = create_test_user(&pool, "Bea", "bea@example.com").await;

        let result = service.record_purchase(bea.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(Error::RecipeNotFound(_))));
    }

    #[tokio::test]
    async fn test_purchase_by_unknown_user() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let ana = create_test_user(&pool, "Ana", "ana@example.com").await;
        let recipe = create_test_recipe(&pool, ana.id, "Flan").await;

        let result = service.record_purchase(Uuid::new_v4(), recipe.id).await;
        assert!(matches!(result, Err(Error::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_deleting_recipe_empties_purchased_listing() {
        let pool = create_test_db().await;
        let service = PurchaseService::new(pool.clone());
        let ana = create_test_user(&pool, "Ana", "ana@example.com").await;
        let bea = create_test_user(&pool, "Bea", "bea@example.com").await;
        let recipe = create_test_recipe(&pool, ana.id, "Flan").await;

        service.record_purchase(bea.id, recipe.id).await.unwrap();
        RecipeRepository::new(pool.clone()).delete(recipe.id).await.unwrap();

        let owned = service.list_purchased(bea.id).await.unwrap();
        assert_eq!(owned.total_count, 0);
        assert!(owned.items.is_empty());
    }
}
