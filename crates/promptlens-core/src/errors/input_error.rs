//! Input errors: rejected before tokenization.

use super::error_code::{self, LensErrorCode};

/// Errors raised for prompt input that cannot be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Prompt '{id}' has no text")]
    MissingText { id: String },

    #[error("Prompt identifier must not be blank")]
    BlankId,

    #[error("Prompt '{id}' appears more than once in the corpus")]
    DuplicateId { id: String },

    #[error("Invalid search query '{query}': {message}")]
    InvalidQuery { query: String, message: String },
}

impl InputError {
    /// The prompt id the error refers to, when there is one.
    pub fn prompt_id(&self) -> Option<&str> {
        match self {
            Self::MissingText { id } | Self::DuplicateId { id } => Some(id),
            Self::BlankId | Self::InvalidQuery { .. } => None,
        }
    }
}

impl LensErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId { .. } => error_code::DUPLICATE_PROMPT,
            _ => error_code::INPUT_ERROR,
        }
    }
}
