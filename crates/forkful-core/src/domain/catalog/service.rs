//! Catalog service orchestrating the query pipeline
//!
//! Visibility filter -> (for search) match classification -> valuation
//! ranking -> pagination. Empty results are empty pages, never errors.

use super::{RecipeListing, matching, page, rank};
use crate::domain::recipe::{AuthoredRecipe, RecipeRepository};
use crate::domain::user::UserRepository;
use crate::error::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Service for catalog discovery queries
#[derive(Debug, Clone)]
pub struct CatalogService {
    recipes: RecipeRepository,
    users: UserRepository,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            recipes: RecipeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Recipes structurally eligible for discovery by a viewer
    ///
    /// Excludes the viewer's own recipes and everything the viewer has
    /// already purchased. The viewer must exist.
    pub async fn eligible_candidates(&self, viewer_id: Uuid) -> Result<Vec<AuthoredRecipe>> {
        self.users.require(viewer_id).await?;
        self.recipes.list_available_to(viewer_id).await
    }

    /// One page of the viewer's discovery feed, best valuation first
    pub async fn list_available(&self, viewer_id: Uuid, page: u32) -> Result<RecipeListing> {
        let mut candidates = self.eligible_candidates(viewer_id).await?;
        rank::by_valuation(&mut candidates);

        let (items, total_count) = page::paginate(candidates, page)?;
        tracing::debug!(viewer_id = %viewer_id, page = page, total = total_count, "Listed available recipes");
        Ok(RecipeListing { items, total_count })
    }

    /// Search the viewer's discovery feed for a term
    ///
    /// Title matches rank strictly above ingredient matches; each tier is
    /// ordered by valuation independently, then concatenated.
    pub async fn search(&self, viewer_id: Uuid, term: &str, page: u32) -> Result<RecipeListing> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::InvalidQuery(
                "Search term must not be empty".to_string(),
            ));
        }

        let candidates = self.eligible_candidates(viewer_id).await?;
        let (mut title_matches, mut ingredient_matches) = matching::classify(candidates, term);

        rank::by_valuation(&mut title_matches);
        rank::by_valuation(&mut ingredient_matches);

        let mut ordered = title_matches;
        ordered.append(&mut ingredient_matches);

        let (items, total_count) = page::paginate(ordered, page)?;
        tracing::debug!(viewer_id = %viewer_id, term = term, page = page, total = total_count, "Searched recipes");
        Ok(RecipeListing { items, total_count })
    }

    /// One page of the viewer's own published recipes, newest first
    pub async fn list_own(&self, viewer_id: Uuid, page: u32) -> Result<RecipeListing> {
        self.list_by_author(viewer_id, page).await
    }

    /// One page of an author's published recipes, newest first
    pub async fn list_by_author(&self, author_id: Uuid, page: u32) -> Result<RecipeListing> {
        self.users.require(author_id).await?;

        let authored = self.recipes.list_by_author(author_id).await?;
        let (items, total_count) = page::paginate(authored, page)?;
        Ok(RecipeListing { items, total_count })
    }
}
