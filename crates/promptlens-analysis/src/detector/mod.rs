//! Pattern detector: applies a pattern library to one prompt.

pub mod detect;
pub mod types;

pub use detect::{detect, detect_with_limits};
pub use types::{DetectionRecord, ExcerptLimits};
