//! Recipe entity and related types

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Quantity, must be positive
    pub quantity: f64,
    /// Optional unit (grams, cups, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A single preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// What to do in this step
    pub description: String,
    /// Optional image reference illustrating the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A published recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: Uuid,
    /// Recipe title
    pub title: String,
    /// Recipe description
    pub description: String,
    /// Image references
    pub images: Vec<String>,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    pub steps: Vec<Step>,
    /// Purchase price, non-negative
    pub price: f64,
    /// Aggregate quality score, primary sort key for listings
    pub valuation: f64,
    /// The publishing user; always set server-side
    pub author_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modified timestamp
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new recipe
///
/// The author is never part of the draft; it is taken from the
/// authenticated identity when the recipe is created.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub price: f64,
}

/// Closed set of updatable recipe fields
///
/// Replaces a dynamic field-name allow-list: unknown field names are
/// rejected during deserialization, and application is all-or-nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<Step>>,
    pub price: Option<f64>,
    pub valuation: Option<f64>,
}

impl RecipeUpdate {
    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.images.is_none()
            && self.ingredients.is_none()
            && self.steps.is_none()
            && self.price.is_none()
            && self.valuation.is_none()
    }

    /// Apply every present field to the recipe
    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            recipe.description = description.trim().to_string();
        }
        if let Some(images) = self.images {
            recipe.images = images;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(steps) = self.steps {
            recipe.steps = steps;
        }
        if let Some(price) = self.price {
            recipe.price = price;
        }
        if let Some(valuation) = self.valuation {
            recipe.valuation = valuation;
        }
        recipe.updated_at = Utc::now();
    }
}

impl Recipe {
    /// Build a new recipe from a draft, owned by the given author
    pub fn from_draft(author_id: Uuid, draft: RecipeDraft) -> Result<Self> {
        let now = Utc::now();
        let recipe = Self {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            images: draft.images,
            ingredients: draft.ingredients,
            steps: draft.steps,
            price: draft.price,
            valuation: 0.0,
            author_id,
            created_at: now,
            updated_at: now,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Check entity invariants
    ///
    /// Title and description must be non-empty after trimming, the price
    /// non-negative, and every ingredient named with a positive quantity.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Recipe title must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(
                "Recipe description must not be empty".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::Validation(format!("Invalid price: {}", self.price)));
        }
        if !self.valuation.is_finite() {
            return Err(Error::Validation(format!(
                "Invalid valuation: {}",
                self.valuation
            )));
        }
        for ingredient in &self.ingredients {
            if ingredient.name.trim().is_empty() {
                return Err(Error::Validation(
                    "Every ingredient must have a name".to_string(),
                ));
            }
            if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                return Err(Error::Validation(format!(
                    "Ingredient '{}' must have a positive quantity",
                    ingredient.name
                )));
            }
        }
        for step in &self.steps {
            if step.description.trim().is_empty() {
                return Err(Error::Validation(
                    "Every step must have a description".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A recipe paired with its author's display name, as shaped for listings
///
/// Listings never expose the author's account record; only the display
/// name travels with the recipe.
#[derive(Debug, Clone, Serialize)]
pub struct AuthoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub author_name: String,
}
