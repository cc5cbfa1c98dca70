//! Detection record types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use promptlens_core::constants::{DEFAULT_EXCERPT_LIMIT, DEFAULT_EXCERPT_MAX_CHARS};
use promptlens_core::types::SmallVec5;

/// Bounds on the excerpts kept per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptLimits {
    /// Excerpts kept per category.
    pub max_excerpts: usize,
    /// Characters kept per excerpt.
    pub max_chars: usize,
}

impl Default for ExcerptLimits {
    fn default() -> Self {
        Self {
            max_excerpts: DEFAULT_EXCERPT_LIMIT,
            max_chars: DEFAULT_EXCERPT_MAX_CHARS,
        }
    }
}

/// Per-prompt detection result.
///
/// Every library category is a key of `counts` and `excerpts`, including
/// categories with no match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub prompt_id: String,
    /// Category → number of rule matches.
    pub counts: BTreeMap<String, u32>,
    /// Category → matched excerpts, ordered by position in the text.
    pub excerpts: BTreeMap<String, SmallVec5<String>>,
    /// Categories with at least one match.
    pub matched: BTreeSet<String>,
}

impl DetectionRecord {
    /// Match count for a category; 0 for unknown categories.
    pub fn count(&self, category: &str) -> u32 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn is_matched(&self, category: &str) -> bool {
        self.matched.contains(category)
    }

    /// Number of distinct matched categories.
    pub fn diversity(&self) -> usize {
        self.matched.len()
    }

    /// Number of categories in the library the record was built from.
    pub fn category_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total_matches(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}
