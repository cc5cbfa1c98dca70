//! Quality scoring: text statistics, keyword taxonomy, and the five scores.

pub mod scorer;
pub mod taxonomy;
pub mod text_stats;
pub mod types;

pub use scorer::{score, QualityScorer};
pub use taxonomy::{KeywordCategoryDefinition, KeywordTaxonomy, TaxonomyDefinition};
pub use text_stats::{count_syllables, TextStats};
pub use types::ScoreRecord;
