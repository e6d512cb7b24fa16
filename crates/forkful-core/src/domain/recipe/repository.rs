//! Recipe repository for database operations
//!
//! Handles recipe persistence and the candidate-set queries consumed by the
//! catalog engine. List-valued columns are JSON text.

use super::entity::{AuthoredRecipe, Ingredient, Recipe, Step};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for recipe database operations
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    pool: SqlitePool,
}

/// Columns selected for joined recipe + author name queries
const AUTHORED_COLUMNS: &str = r#"
    r.id, r.title, r.description, r.images, r.ingredients, r.steps,
    r.price, r.valuation, r.author_id, r.created_at, r.updated_at,
    u.name AS author_name
"#;

impl RecipeRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new recipe; fails with `Validation` on invariant violations
    pub async fn create(&self, recipe: &Recipe) -> Result<()> {
        recipe.validate()?;

        let (images, ingredients, steps) = encode_lists(recipe)?;

        sqlx::query(
            r#"
            INSERT INTO recipes (
                id, title, description, images, ingredients, steps,
                price, valuation, author_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(recipe.id.to_string())
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&images)
        .bind(&ingredients)
        .bind(&steps)
        .bind(recipe.price)
        .bind(recipe.valuation)
        .bind(recipe.author_id.to_string())
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        tracing::debug!(recipe_id = %recipe.id, author_id = %recipe.author_id, "Created recipe");
        Ok(())
    }

    /// Get a recipe by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        let row: Option<RecipeRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, images, ingredients, steps,
                   price, valuation, author_id, created_at, updated_at
            FROM recipes
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        match row {
            Some(row) => Ok(Some(row.into_recipe()?)),
            None => Ok(None),
        }
    }

    /// All recipes visible to a viewer for discovery
    ///
    /// Set-difference over the catalog: not authored by the viewer and not
    /// already purchased by the viewer. The base order (created_at, id) is
    /// deterministic so downstream stable ranking keeps pages reproducible.
    pub async fn list_available_to(&self, viewer_id: Uuid) -> Result<Vec<AuthoredRecipe>> {
        let viewer = viewer_id.to_string();

        let sql = format!(
            r#"
            SELECT {AUTHORED_COLUMNS}
            FROM recipes r
            JOIN users u ON u.id = r.author_id
            WHERE r.author_id != ?
              AND r.id NOT IN (SELECT recipe_id FROM purchases WHERE user_id = ?)
            ORDER BY r.created_at ASC, r.id ASC
            "#
        );

        let rows: Vec<AuthoredRecipeRow> = sqlx::query_as(&sql)
            .bind(&viewer)
            .bind(&viewer)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::DatabaseError)?;

        rows.into_iter().map(|row| row.into_authored()).collect()
    }

    /// All recipes published by the given author, newest first
    pub async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<AuthoredRecipe>> {
        let sql = format!(
            r#"
            SELECT {AUTHORED_COLUMNS}
            FROM recipes r
            JOIN users u ON u.id = r.author_id
            WHERE r.author_id = ?
            ORDER BY r.created_at DESC, r.id ASC
            "#
        );

        let rows: Vec<AuthoredRecipeRow> = sqlx::query_as(&sql)
            .bind(author_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(Error::DatabaseError)?;

        rows.into_iter().map(|row| row.into_authored()).collect()
    }

    /// All recipes the given user has purchased, most recent purchase first
    pub async fn list_purchased_by(&self, user_id: Uuid) -> Result<Vec<AuthoredRecipe>> {
        let sql = format!(
            r#"
            SELECT {AUTHORED_COLUMNS}
            FROM purchases p
            JOIN recipes r ON r.id = p.recipe_id
            JOIN users u ON u.id = r.author_id
            WHERE p.user_id = ?
            ORDER BY p.created_at DESC, r.id ASC
            "#
        );

        let rows: Vec<AuthoredRecipeRow> = sqlx::query_as(&sql)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(Error::DatabaseError)?;

        rows.into_iter().map(|row| row.into_authored()).collect()
    }

    /// Persist changes to an existing recipe
    pub async fn update(&self, recipe: &Recipe) -> Result<()> {
        recipe.validate()?;

        let (images, ingredients, steps) = encode_lists(recipe)?;

        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET title = ?, description = ?, images = ?, ingredients = ?, steps = ?,
                price = ?, valuation = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&images)
        .bind(&ingredients)
        .bind(&steps)
        .bind(recipe.price)
        .bind(recipe.valuation)
        .bind(Utc::now())
        .bind(recipe.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(Error::RecipeNotFound(recipe.id.to_string()));
        }
        Ok(())
    }

    /// Delete a recipe and its dependent purchases as one transaction
    ///
    /// Dependents go first, then the recipe itself; either both succeed or
    /// neither does. Returns the deleted recipe.
    pub async fn delete(&self, id: Uuid) -> Result<Recipe> {
        let recipe = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::RecipeNotFound(id.to_string()))?;

        let mut tx = self.pool.begin().await.map_err(Error::DatabaseError)?;

        let purged = sqlx::query("DELETE FROM purchases WHERE recipe_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(Error::DatabaseError)?;

        sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(Error::DatabaseError)?;

        tx.commit().await.map_err(Error::DatabaseError)?;

        tracing::info!(
            recipe_id = %id,
            purchases_removed = purged.rows_affected(),
            "Deleted recipe with dependent purchases"
        );
        Ok(recipe)
    }
}

/// Serialize the recipe's list-valued fields to JSON text columns
fn encode_lists(recipe: &Recipe) -> Result<(String, String, String)> {
    let images = serde_json::to_string(&recipe.images)
        .map_err(|e| Error::Parse(format!("Failed to serialize images: {}", e)))?;
    let ingredients = serde_json::to_string(&recipe.ingredients)
        .map_err(|e| Error::Parse(format!("Failed to serialize ingredients: {}", e)))?;
    let steps = serde_json::to_string(&recipe.steps)
        .map_err(|e| Error::Parse(format!("Failed to serialize steps: {}", e)))?;
    Ok((images, ingredients, steps))
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: String,
    title: String,
    description: String,
    images: String,
    ingredients: String,
    steps: String,
    price: f64,
    valuation: f64,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self) -> Result<Recipe> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| Error::Parse(format!("Invalid recipe ID: {}", e)))?;
        let author_id = Uuid::parse_str(&self.author_id)
            .map_err(|e| Error::Parse(format!("Invalid author ID: {}", e)))?;
        let images: Vec<String> = serde_json::from_str(&self.images)
            .map_err(|e| Error::Parse(format!("Invalid images column: {}", e)))?;
        let ingredients: Vec<Ingredient> = serde_json::from_str(&self.ingredients)
            .map_err(|e| Error::Parse(format!("Invalid ingredients column: {}", e)))?;
        let steps: Vec<Step> = serde_json::from_str(&self.steps)
            .map_err(|e| Error::Parse(format!("Invalid steps column: {}", e)))?;

        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            images,
            ingredients,
            steps,
            price: self.price,
            valuation: self.valuation,
            author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthoredRecipeRow {
    id: String,
    title: String,
    description: String,
    images: String,
    ingredients: String,
    steps: String,
    price: f64,
    valuation: f64,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
}

impl AuthoredRecipeRow {
    fn into_authored(self) -> Result<AuthoredRecipe> {
        let author_name = self.author_name;
        let recipe = RecipeRow {
            id: self.id,
            title: self.title,
            description: self.description,
            images: self.images,
            ingredients: self.ingredients,
            steps: self.steps,
            price: self.price,
            valuation: self.valuation,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_recipe()?;

        Ok(AuthoredRecipe {
            recipe,
            author_name,
        })
    }
}
