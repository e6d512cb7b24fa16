//! User repository for database operations

use super::entity::User;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for user database operations
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new user; fails with `Validation` on invariant violations
    pub async fn create(&self, user: &User) -> Result<()> {
        user.validate()?;

        let tokens = serde_json::to_string(&user.tokens)
            .map_err(|e| Error::Parse(format!("Failed to serialize tokens: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, telephone, tokens, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.telephone)
        .bind(&tokens)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        tracing::debug!(user_id = %user.id, "Created user");
        Ok(())
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, password_hash, telephone, tokens, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        match row {
            Some(row) => Ok(Some(row.into_user()?)),
            None => Ok(None),
        }
    }

    /// Get a user by ID, failing with `UserNotFound` when absent
    pub async fn require(&self, id: Uuid) -> Result<User> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| Error::UserNotFound(id.to_string()))
    }

    /// Get a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, password_hash, telephone, tokens, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        match row {
            Some(row) => Ok(Some(row.into_user()?)),
            None => Ok(None),
        }
    }

    /// Persist changes to an existing user (name, contact details, tokens)
    pub async fn update(&self, user: &User) -> Result<()> {
        user.validate()?;

        let tokens = serde_json::to_string(&user.tokens)
            .map_err(|e| Error::Parse(format!("Failed to serialize tokens: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?, password_hash = ?, telephone = ?, tokens = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.telephone)
        .bind(&tokens)
        .bind(Utc::now())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(Error::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(Error::UserNotFound(user.id.to_string()));
        }
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    telephone: String,
    tokens: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| Error::Parse(format!("Invalid user ID: {}", e)))?;
        let tokens: Vec<String> = serde_json::from_str(&self.tokens)
            .map_err(|e| Error::Parse(format!("Invalid tokens column: {}", e)))?;

        Ok(User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            telephone: self.telephone,
            tokens,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
