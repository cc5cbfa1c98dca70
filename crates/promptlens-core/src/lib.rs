//! PromptLens core: errors, configuration, tracing, and shared types.
//!
//! Everything here is consumed by `promptlens-analysis`; nothing in this crate
//! performs analysis itself.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
