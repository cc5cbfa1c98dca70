//! Corpus aggregation configuration: consistency threshold, percentage
//! rounding, compliance weights and insight rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PERCENTAGE_PRECISION, DEFAULT_TONE_CONSISTENCY_THRESHOLD};

/// Direction of an insight threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Below,
    Above,
}

impl Comparison {
    /// Returns true if `value` is on the triggering side of `threshold`.
    pub fn triggers(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Below => value < threshold,
            Self::Above => value > threshold,
        }
    }
}

/// What an insight tells the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Issue,
    BestPractice,
    Recommendation,
}

/// A usage-percentage rule evaluated against a corpus summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRule {
    /// Pattern category whose usage percentage is checked.
    pub category: String,
    pub comparison: Comparison,
    /// Threshold in percent (0-100).
    pub threshold: f64,
    pub kind: InsightKind,
    pub message: String,
}

impl InsightRule {
    fn new(category: &str, comparison: Comparison, threshold: f64, kind: InsightKind, message: &str) -> Self {
        Self {
            category: category.to_string(),
            comparison,
            threshold,
            kind,
            message: message.to_string(),
        }
    }
}

/// Configuration for corpus-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// Tone standard deviation below which the corpus is tone-consistent. Default: 1.5.
    pub tone_consistency_threshold: Option<f64>,
    /// Decimal places for reported usage percentages. Default: 1.
    pub percentage_precision: Option<u32>,
    /// Category → compliance weight. Empty means the built-in weights.
    #[serde(default)]
    pub compliance_weights: BTreeMap<String, f64>,
    /// Insight rules. Empty means the built-in rules.
    #[serde(default)]
    pub insight_rules: Vec<InsightRule>,
}

impl CorpusConfig {
    /// Returns the effective tone consistency threshold, defaulting to 1.5.
    pub fn effective_tone_consistency_threshold(&self) -> f64 {
        self.tone_consistency_threshold
            .unwrap_or(DEFAULT_TONE_CONSISTENCY_THRESHOLD)
    }

    /// Returns the effective percentage precision, defaulting to 1 decimal place.
    pub fn effective_percentage_precision(&self) -> u32 {
        self.percentage_precision.unwrap_or(DEFAULT_PERCENTAGE_PRECISION)
    }

    /// Returns the configured compliance weights, or the built-in table.
    pub fn effective_compliance_weights(&self) -> BTreeMap<String, f64> {
        if self.compliance_weights.is_empty() {
            default_compliance_weights()
        } else {
            self.compliance_weights.clone()
        }
    }

    /// Returns the configured insight rules, or the built-in rules.
    pub fn effective_insight_rules(&self) -> Vec<InsightRule> {
        if self.insight_rules.is_empty() {
            default_insight_rules()
        } else {
            self.insight_rules.clone()
        }
    }
}

/// Built-in compliance weights. They sum to 100.
pub fn default_compliance_weights() -> BTreeMap<String, f64> {
    [
        ("xml_blocks", 25.0),
        ("variables", 20.0),
        ("topic_blocks", 15.0),
        ("role_definition", 10.0),
        ("instructions", 10.0),
        ("anti_hallucination", 10.0),
        ("output_format", 5.0),
        ("markdown", 5.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Built-in insight rules.
pub fn default_insight_rules() -> Vec<InsightRule> {
    use Comparison::{Above, Below};
    use InsightKind::{BestPractice, Issue, Recommendation};

    vec![
        InsightRule::new(
            "anti_hallucination",
            Below,
            30.0,
            Issue,
            "Less than 30% of prompts include anti-hallucination instructions",
        ),
        InsightRule::new("examples", Below, 20.0, Issue, "Less than 20% of prompts provide examples"),
        InsightRule::new(
            "step_by_step",
            Below,
            40.0,
            Issue,
            "Less than 40% of prompts use step-by-step instructions",
        ),
        InsightRule::new(
            "xml_blocks",
            Below,
            50.0,
            Issue,
            "Less than 50% of prompts use structured XML-style tags",
        ),
        InsightRule::new(
            "role_definition",
            Above,
            70.0,
            BestPractice,
            "Strong role definition usage (>70%)",
        ),
        InsightRule::new(
            "instructions",
            Above,
            60.0,
            BestPractice,
            "Good instruction section coverage (>60%)",
        ),
        InsightRule::new(
            "xml_blocks",
            Above,
            60.0,
            BestPractice,
            "Good use of structured XML-style tags (>60%)",
        ),
        InsightRule::new(
            "anti_hallucination",
            Below,
            50.0,
            Recommendation,
            "Add anti-hallucination instructions to more prompts",
        ),
        InsightRule::new(
            "examples",
            Below,
            30.0,
            Recommendation,
            "Include examples in prompts for better clarity",
        ),
        InsightRule::new(
            "output_format",
            Below,
            40.0,
            Recommendation,
            "Define output formats more consistently",
        ),
        InsightRule::new(
            "xml_blocks",
            Below,
            50.0,
            Recommendation,
            "Use more structured XML-style tags for better organization",
        ),
    ]
}
