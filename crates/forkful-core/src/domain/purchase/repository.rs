//! Purchase repository for database operations

use super::entity::Purchase;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for purchase database operations
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a purchase record
    pub async fn create(&self, purchase: &Purchase) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO purchases (id, recipe_id, user_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(purchase.id.to_string())
        .bind(purchase.recipe_id.to_string())
        .bind(purchase.user_id.to_string())
        .bind(purchase.created_at)
        .execute(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        tracing::debug!(
            purchase_id = %purchase.id,
            recipe_id = %purchase.recipe_id,
            user_id = %purchase.user_id,
            "Recorded purchase"
        );
        Ok(())
    }

    /// Whether the user already purchased the recipe
    pub async fn exists(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM purchases WHERE user_id = ? AND recipe_id = ? LIMIT 1",
        )
        .bind(user_id.to_string())
        .bind(recipe_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        Ok(row.is_some())
    }

    /// All purchases made by a user, most recent first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Purchase>> {
        let rows: Vec<PurchaseRow> = sqlx::query_as(
            r#"
            SELECT id, recipe_id, user_id, created_at
            FROM purchases
            WHERE user_id = ?
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        rows.into_iter().map(|row| row.into_purchase()).collect()
    }
}

#[derive(sqlx::FromRow)]
struct PurchaseRow {
    id: String,
    recipe_id: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl PurchaseRow {
    fn into_purchase(self) -> Result<Purchase> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| Error::Parse(format!("Invalid purchase ID: {}", e)))?;
        let recipe_id = Uuid::parse_str(&self.recipe_id)
            .map_err(|e| Error::Parse(format!("Invalid recipe ID: {}", e)))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| Error::Parse(format!("Invalid user ID: {}", e)))?;

        Ok(Purchase {
            id,
            recipe_id,
            user_id,
            created_at: self.created_at,
        })
    }
}
