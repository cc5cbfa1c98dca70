//! Top-level analysis errors and non-fatal failure collection.

use super::{ConfigError, InputError, LensErrorCode, LibraryError};

/// Errors that can abort an analysis call.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

impl LensErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Library(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
        }
    }
}

/// Result of a batch call that skips invalid prompts instead of failing.
/// `data` never contains anything derived from a failed prompt.
#[derive(Debug, Default)]
pub struct BatchResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Prompts that were skipped, with the reason.
    pub failures: Vec<InputError>,
}

impl<T: Default> BatchResult<T> {
    /// Create a new batch result with no failures.
    pub fn new(data: T) -> Self {
        Self {
            data,
            failures: Vec::new(),
        }
    }

    /// Record a skipped prompt.
    pub fn add_failure(&mut self, failure: InputError) {
        self.failures.push(failure);
    }

    /// Returns true if no prompt was skipped.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of skipped prompts.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
