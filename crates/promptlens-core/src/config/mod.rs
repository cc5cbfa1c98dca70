//! Configuration system for PromptLens.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod corpus_config;
pub mod promptlens_config;
pub mod scoring_config;

pub use analysis_config::{AnalysisConfig, BatchPolicy};
pub use corpus_config::{Comparison, CorpusConfig, InsightKind, InsightRule};
pub use promptlens_config::{CliOverrides, PromptLensConfig};
pub use scoring_config::{
    ClarityWeights, ComplexityWeights, ReadabilityWeights, ScoringConfig, StructureWeights,
    ToneWeights,
};
