//! Search-term classification
//!
//! Case-insensitive substring containment over title and ingredient names.
//! Tiering is strict: a title match never also counts as an ingredient
//! match, and non-matches are dropped. No stemming, tokenization, or fuzzy
//! distance.

use crate::domain::recipe::AuthoredRecipe;

/// Split candidates into title matches and ingredient matches for a term
///
/// Returns `(title_matches, ingredient_matches)`; each candidate lands in at
/// most one of the two. Relative order within each tier is preserved.
pub fn classify(
    candidates: Vec<AuthoredRecipe>,
    term: &str,
) -> (Vec<AuthoredRecipe>, Vec<AuthoredRecipe>) {
    let needle = term.to_lowercase();

    let mut title_matches = Vec::new();
    let mut ingredient_matches = Vec::new();

    for candidate in candidates {
        if candidate.recipe.title.to_lowercase().contains(&needle) {
            title_matches.push(candidate);
        } else if candidate
            .recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&needle))
        {
            ingredient_matches.push(candidate);
        }
    }

    (title_matches, ingredient_matches)
}
