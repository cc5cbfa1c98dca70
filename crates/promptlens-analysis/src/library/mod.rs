//! Pattern library: category → ordered rule registry, compiled once and shared
//! read-only by every detection call.

pub mod defaults;
pub mod definition;
pub mod types;

pub use definition::{CategoryDefinition, LibraryDefinition, RuleDefinition};
pub use types::{PatternCategory, PatternLibrary, PatternRule, RuleKind, RESERVED_CATEGORY_NAMES};

use promptlens_core::errors::LibraryError;

/// Build a pattern library from a definition.
///
/// Validates the whole definition before returning: at least one category,
/// no blank, reserved or duplicate category names, no empty category, no blank pattern,
/// every regex compiles.
pub fn load_pattern_library(definition: &LibraryDefinition) -> Result<PatternLibrary, LibraryError> {
    PatternLibrary::from_definition(definition)
}
