//! Catalog query engine
//!
//! Decides which recipes a viewer can discover, in what order, and in what
//! page: visibility filtering, search-term classification, valuation
//! ranking, and fixed-size pagination.

pub mod matching;
pub mod page;
pub mod rank;
pub mod service;

use crate::domain::recipe::AuthoredRecipe;
use serde::Serialize;

pub use page::PAGE_SIZE;
pub use service::CatalogService;

/// One page of shaped listing results plus the size of the full result set
#[derive(Debug, Clone, Serialize)]
pub struct RecipeListing {
    /// Recipes on this page, each carrying the author's display name
    pub items: Vec<AuthoredRecipe>,
    /// Length of the filtered/ordered result set before slicing
    pub total_count: usize,
}
