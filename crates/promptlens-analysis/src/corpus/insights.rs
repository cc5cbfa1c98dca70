//! Data-driven insights from usage percentages.

use serde::{Deserialize, Serialize};

use promptlens_core::config::{InsightKind, InsightRule};

use super::summary::CorpusSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub category: String,
    /// Rounded usage percentage that triggered the rule.
    pub usage: f64,
    pub message: String,
}

/// Evaluate rules in order against the summary.
///
/// Rules naming a category the corpus never saw are skipped, as is every rule
/// on an empty corpus.
pub fn generate_insights(summary: &CorpusSummary, rules: &[InsightRule]) -> Vec<Insight> {
    if summary.is_empty() {
        return Vec::new();
    }

    rules
        .iter()
        .filter(|rule| summary.categories().any(|c| c == rule.category))
        .filter_map(|rule| {
            let raw = summary.raw_usage_percentage(&rule.category);
            rule.comparison.triggers(raw, rule.threshold).then(|| Insight {
                kind: rule.kind,
                category: rule.category.clone(),
                usage: summary.usage_percentage(&rule.category),
                message: rule.message.clone(),
            })
        })
        .collect()
}
