//! Error handling for PromptLens.
//! One error enum per concern, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod library_error;

pub use analysis_error::{AnalysisError, BatchResult};
pub use config_error::ConfigError;
pub use error_code::LensErrorCode;
pub use input_error::InputError;
pub use library_error::LibraryError;
