//! PromptLens analysis engine.
//!
//! Text in, typed records out:
//! - [`library`] compiles category → rule tables,
//! - [`detector`] counts rule matches per category,
//! - [`conventions`] discovers open-ended tags, variables, headers and naming,
//! - [`scoring`] derives the five quality scores,
//! - [`corpus`] folds records into usage, score and convention statistics.
//!
//! [`engine::Analyzer`] ties them together behind the single-prompt and corpus
//! entry points.

pub mod conventions;
pub mod corpus;
pub mod detector;
pub mod engine;
pub mod export;
pub mod library;
pub mod scoring;
pub mod search;

pub use corpus::{
    combine, filter_corpus, summarize, CorpusSummary, FilterSpec, PromptInput, PromptMetadata,
    PromptRecord,
};
pub use detector::{detect, DetectionRecord};
pub use engine::Analyzer;
pub use export::{export_record, export_summary, ExportValue};
pub use library::{load_pattern_library, PatternLibrary};
pub use scoring::{score, KeywordTaxonomy, ScoreRecord};
pub use search::{search_prompts, SearchHit, SearchMode};
