//! Valuation ranking
//!
//! Stable descending sort by valuation. Ties keep their pre-sort relative
//! order, which keeps pagination deterministic over an unchanged snapshot.

use crate::domain::recipe::AuthoredRecipe;

/// Order candidates by valuation, highest first
///
/// `sort_by` is stable; equal valuations retain their incoming order.
pub fn by_valuation(candidates: &mut [AuthoredRecipe]) {
    candidates.sort_by(|a, b| {
        b.recipe
            .valuation
            .partial_cmp(&a.recipe.valuation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
