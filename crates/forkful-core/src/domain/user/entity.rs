//! User entity and format validation

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A marketplace account
///
/// The password hash and the active session tokens are never serialized
/// outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Display name, shown as the author of published recipes
    pub name: String,
    /// Unique email address
    pub email: String,
    /// One-way password hash; hashing itself happens at the boundary
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Contact telephone number
    pub telephone: String,
    /// Active session tokens (opaque strings issued by the auth layer)
    #[serde(skip_serializing, default)]
    pub tokens: Vec<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Account last modified timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user; format validation runs before persistence
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Result<Self> {
        let now = Utc::now();
        let user = Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            password_hash: password_hash.into(),
            telephone: telephone.into().trim().to_string(),
            tokens: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        user.validate()?;
        Ok(user)
    }

    /// Check entity invariants: non-empty name, valid email and telephone
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Validation("User name must not be empty".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(Error::Validation(format!("Invalid email: {}", self.email)));
        }
        if !is_valid_telephone(&self.telephone) {
            return Err(Error::Validation(format!(
                "Invalid telephone: {}",
                self.telephone
            )));
        }
        if self.password_hash.is_empty() {
            return Err(Error::Validation("Password hash must not be empty".to_string()));
        }
        Ok(())
    }

    /// Register a session token issued by the auth layer
    pub fn add_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
        self.updated_at = Utc::now();
    }

    /// Revoke a session token; returns whether it was present
    pub fn remove_token(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.updated_at = Utc::now();
        self.tokens.len() != before
    }
}

/// Minimal email syntax check: one '@', non-empty local part, dotted domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Telephone syntax check: optional leading '+', then 7-15 digits
/// (spaces and dashes allowed as separators)
fn is_valid_telephone(telephone: &str) -> bool {
    let trimmed = telephone.strip_prefix('+').unwrap_or(telephone);
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    let separators_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
    separators_only && (7..=15).contains(&digits.len())
}
