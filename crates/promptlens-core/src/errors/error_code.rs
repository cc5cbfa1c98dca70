//! LensErrorCode trait for structured error reporting.

/// Trait for mapping PromptLens errors to stable error code strings.
/// Front ends (CLI, dashboards) key their messages off these codes.
pub trait LensErrorCode {
    /// Returns the error code string (e.g., "LIBRARY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LIBRARY_ERROR: &str = "LIBRARY_ERROR";
pub const INVALID_REGEX: &str = "INVALID_REGEX";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const DUPLICATE_PROMPT: &str = "DUPLICATE_PROMPT";
