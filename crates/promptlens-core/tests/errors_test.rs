//! Tests for the PromptLens error types.

use promptlens_core::errors::{
    AnalysisError, BatchResult, ConfigError, InputError, LensErrorCode, LibraryError,
};

/// Every error enum maps to a stable code.
#[test]
fn test_error_codes() {
    let config = ConfigError::FileNotFound {
        path: "promptlens.toml".to_string(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let library = LibraryError::EmptyCategory {
        category: "examples".to_string(),
    };
    assert_eq!(library.error_code(), "LIBRARY_ERROR");

    let regex = LibraryError::InvalidRegex {
        category: "examples".to_string(),
        pattern: "(".to_string(),
        message: "unclosed group".to_string(),
    };
    assert_eq!(regex.error_code(), "INVALID_REGEX");

    assert_eq!(InputError::BlankId.error_code(), "INPUT_ERROR");
    assert_eq!(
        InputError::DuplicateId { id: "p1".to_string() }.error_code(),
        "DUPLICATE_PROMPT"
    );
}

#[test]
fn test_tagged_string_format() {
    let err = InputError::MissingText { id: "p7".to_string() };
    assert_eq!(err.tagged_string(), "[INPUT_ERROR] Prompt 'p7' has no text");
}

/// `AnalysisError` keeps the code of the wrapped error.
#[test]
fn test_analysis_error_from_conversions() {
    let err: AnalysisError = LibraryError::EmptyLibrary.into();
    assert_eq!(err.error_code(), "LIBRARY_ERROR");
    assert!(err.to_string().contains("no categories"));

    let err: AnalysisError = InputError::DuplicateId { id: "a".to_string() }.into();
    assert_eq!(err.error_code(), "DUPLICATE_PROMPT");

    let err: AnalysisError = ConfigError::ValidationFailed {
        field: "corpus.percentage_precision".to_string(),
        message: "must be between 0 and 6".to_string(),
    }
    .into();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
fn test_input_error_prompt_id() {
    assert_eq!(
        InputError::MissingText { id: "x".to_string() }.prompt_id(),
        Some("x")
    );
    assert_eq!(InputError::BlankId.prompt_id(), None);
}

#[test]
fn test_batch_result_failures() {
    let mut result: BatchResult<Vec<String>> = BatchResult::new(vec!["ok".to_string()]);
    assert!(result.is_clean());

    result.add_failure(InputError::BlankId);
    result.add_failure(InputError::MissingText { id: "p2".to_string() });
    assert!(!result.is_clean());
    assert_eq!(result.failure_count(), 2);
    assert_eq!(result.data.len(), 1);
}
