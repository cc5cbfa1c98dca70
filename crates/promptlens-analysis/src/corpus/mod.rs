//! Corpus aggregation: per-prompt records folded into usage percentages,
//! score distributions, convention profiles, breakdowns and insights.

pub mod breakdown;
pub mod compliance;
pub mod filter;
pub mod insights;
pub mod stats;
pub mod summary;
pub mod types;

pub use breakdown::{breakdown, GroupBy, GroupStats, UNASSIGNED_GROUP};
pub use compliance::compliance_score;
pub use filter::{filter, filter_corpus, FilterSpec};
pub use insights::{generate_insights, Insight};
pub use stats::{ScoreAccumulator, ScoreStats};
pub use summary::{combine, summarize, CorpusSummary};
pub use types::{PromptInput, PromptMetadata, PromptRecord, ScoreDimension};
