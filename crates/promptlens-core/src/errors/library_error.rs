//! Pattern library and keyword taxonomy construction errors.
//!
//! Raised only while building a library or taxonomy, never during per-prompt
//! analysis.

use super::error_code::{self, LensErrorCode};

/// Errors that can occur while building a pattern library or keyword taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Pattern library defines no categories")]
    EmptyLibrary,

    #[error("Category '{category}' has no rules")]
    EmptyCategory { category: String },

    #[error("Category name must not be blank")]
    BlankCategoryName,

    #[error("Category name '{category}' is reserved")]
    ReservedCategoryName { category: String },

    #[error("Category '{category}' is defined more than once")]
    DuplicateCategory { category: String },

    #[error("Category '{category}' contains a blank pattern")]
    BlankPattern { category: String },

    #[error("Invalid regex in category '{category}' ({pattern}): {message}")]
    InvalidRegex {
        category: String,
        pattern: String,
        message: String,
    },

    #[error("Keyword taxonomy defines no categories")]
    EmptyTaxonomy,

    #[error("Keyword category '{category}' has no keywords")]
    EmptyKeywordCategory { category: String },

    #[error("Failed to build keyword matcher: {message}")]
    AutomatonBuild { message: String },

    #[error("Failed to read definition {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Failed to parse definition {path}: {message}")]
    Unparseable { path: String, message: String },
}

impl LensErrorCode for LibraryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRegex { .. } => error_code::INVALID_REGEX,
            _ => error_code::LIBRARY_ERROR,
        }
    }
}
