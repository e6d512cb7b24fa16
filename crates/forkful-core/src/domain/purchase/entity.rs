//! Purchase entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed purchase of a recipe by a user
///
/// Join record: it owns neither side, and its lifetime is bounded by the
/// referenced recipe (deleted in cascade with it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier for the purchase
    pub id: Uuid,
    /// The purchased recipe
    pub recipe_id: Uuid,
    /// The buyer
    pub user_id: Uuid,
    /// When the purchase was made
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Record a purchase of a recipe by a user
    pub fn new(recipe_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
