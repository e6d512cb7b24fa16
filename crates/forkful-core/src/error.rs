//! Error types for Forkful

use thiserror::Error;

/// Result type alias using Forkful's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Forkful error types
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("User '{0}' not found.")]
    UserNotFound(String),

    #[error("Recipe '{0}' not found.")]
    RecipeNotFound(String),

    // Authorization errors (E100-E199)
    #[error("Only the recipe's author may perform this operation.")]
    NotAuthor,

    #[error("You already own recipe '{0}' as its author.")]
    AlreadyOwned(String),

    #[error("Recipe '{0}' has already been purchased.")]
    AlreadyPurchased(String),

    // Input errors (E200-E299)
    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // Validation errors (E300-E399)
    #[error("Validation failed: {0}")]
    Validation(String),

    // Database errors (E400-E499)
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    // Generic errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "E001",
            Self::RecipeNotFound(_) => "E002",
            Self::NotAuthor => "E100",
            Self::AlreadyOwned(_) => "E101",
            Self::AlreadyPurchased(_) => "E102",
            Self::InvalidUpdate(_) => "E200",
            Self::InvalidQuery(_) => "E201",
            Self::Validation(_) => "E300",
            Self::DatabaseError(_) => "E400",
            Self::Parse(_) => "E401",
            Self::Io(_) => "E9999",
        }
    }

    /// Whether this error maps to an absent entity (a 404-equivalent upstream)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::RecipeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(Error::UserNotFound("u".into()).code(), "E001");
        assert_eq!(Error::RecipeNotFound("r".into()).code(), "E002");
        assert_eq!(Error::NotAuthor.code(), "E100");
        assert_eq!(Error::InvalidUpdate("x".into()).code(), "E200");
        assert_eq!(Error::InvalidQuery("x".into()).code(), "E201");
        assert_eq!(Error::Validation("x".into()).code(), "E300");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(Error::UserNotFound("u".into()).is_not_found());
        assert!(Error::RecipeNotFound("r".into()).is_not_found());
        assert!(!Error::NotAuthor.is_not_found());
        assert!(!Error::InvalidQuery("page".into()).is_not_found());
    }
}
