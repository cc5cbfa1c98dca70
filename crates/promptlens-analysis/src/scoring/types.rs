//! Score record type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::text_stats::TextStats;

/// Per-prompt quality scores with the statistics behind them.
///
/// `complexity`, `clarity`, `tone` and `structure` lie in [0, 10];
/// `readability` lies in [0, 100].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub complexity: f64,
    pub clarity: f64,
    pub tone: f64,
    pub structure: f64,
    pub readability: f64,
    pub stats: TextStats,
    /// Distinct matched pattern categories.
    pub pattern_diversity: u32,
    pub section_headers: u32,
    /// Keyword hits per taxonomy category; every category is a key.
    pub keyword_hits: BTreeMap<String, u32>,
}

impl ScoreRecord {
    /// Hits for a taxonomy category; 0 for unknown categories.
    pub fn keyword_hits(&self, category: &str) -> u32 {
        self.keyword_hits.get(category).copied().unwrap_or(0)
    }
}
