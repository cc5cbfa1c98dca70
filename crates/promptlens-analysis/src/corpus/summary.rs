//! Corpus summary: ordered records plus mergeable aggregates.

use std::collections::BTreeMap;

use promptlens_core::config::CorpusConfig;
use promptlens_core::errors::InputError;
use promptlens_core::types::FxHashMap;

use super::stats::{ScoreAccumulator, ScoreStats};
use super::types::{PromptRecord, ScoreDimension};
use crate::conventions::{merge_into, ConventionProfile};

/// Aggregated view of one analysis pass.
///
/// Records are append-only and keyed by unique prompt id. All aggregates are
/// sums, so two summaries over disjoint prompts merge exactly.
#[derive(Debug, Clone)]
pub struct CorpusSummary {
    records: Vec<PromptRecord>,
    index: FxHashMap<String, usize>,
    /// Category → prompts with at least one match. Every category seen in any
    /// record is a key.
    category_prompts: BTreeMap<String, u64>,
    scores: BTreeMap<ScoreDimension, ScoreAccumulator>,
    compliance: ScoreAccumulator,
    conventions: ConventionProfile,
    percentage_precision: u32,
    tone_consistency_threshold: f64,
}

impl CorpusSummary {
    /// An empty summary using the rounding and consistency settings of `config`.
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
            category_prompts: BTreeMap::new(),
            scores: ScoreDimension::ALL
                .into_iter()
                .map(|d| (d, ScoreAccumulator::default()))
                .collect(),
            compliance: ScoreAccumulator::default(),
            conventions: ConventionProfile::default(),
            percentage_precision: config.effective_percentage_precision(),
            tone_consistency_threshold: config.effective_tone_consistency_threshold(),
        }
    }

    /// Append a record. A duplicate id is rejected and leaves the summary unchanged.
    pub fn push(&mut self, record: PromptRecord) -> Result<(), InputError> {
        if self.index.contains_key(&record.id) {
            return Err(InputError::DuplicateId {
                id: record.id.clone(),
            });
        }

        for (category, &count) in &record.detection.counts {
            let entry = self.category_prompts.entry(category.clone()).or_default();
            if count > 0 {
                *entry += 1;
            }
        }
        for dim in ScoreDimension::ALL {
            self.scores
                .entry(dim)
                .or_default()
                .push(dim.value(&record.scores));
        }
        self.compliance.push(record.compliance);
        merge_into(&mut self.conventions, &record.conventions);

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&PromptRecord> {
        self.index.get(id).map(|&idx| &self.records[idx])
    }

    pub fn total_prompts(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Categories in name order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_prompts.keys().map(String::as_str)
    }

    /// Prompts with at least one match for `category`.
    pub fn prompts_matching(&self, category: &str) -> u64 {
        self.category_prompts.get(category).copied().unwrap_or(0)
    }

    /// Unrounded usage percentage (0-100). 0 for an empty corpus or unknown category.
    pub fn raw_usage_percentage(&self, category: &str) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.prompts_matching(category) as f64 / self.records.len() as f64 * 100.0
    }

    /// Usage percentage rounded to the configured precision.
    pub fn usage_percentage(&self, category: &str) -> f64 {
        round_to(self.raw_usage_percentage(category), self.percentage_precision)
    }

    /// Rounded usage percentage of every category.
    pub fn usage_percentages(&self) -> BTreeMap<String, f64> {
        self.category_prompts
            .keys()
            .map(|c| (c.clone(), self.usage_percentage(c)))
            .collect()
    }

    /// Highest-usage category and its rounded percentage. Ties go to the
    /// lexicographically smallest name. `None` when nothing matched anywhere.
    pub fn dominant_pattern(&self) -> Option<(&str, f64)> {
        // BTreeMap iterates in name order, so a strict `>` keeps the first on ties.
        let mut best: Option<(&str, u64)> = None;
        for (category, &prompts) in &self.category_prompts {
            if prompts > 0 && best.map_or(true, |(_, top)| prompts > top) {
                best = Some((category.as_str(), prompts));
            }
        }
        best.map(|(category, _)| (category, self.usage_percentage(category)))
    }

    pub fn score_stats(&self, dimension: ScoreDimension) -> ScoreStats {
        self.scores
            .get(&dimension)
            .map(ScoreAccumulator::stats)
            .unwrap_or_default()
    }

    pub fn score_accumulator(&self, dimension: ScoreDimension) -> ScoreAccumulator {
        self.scores.get(&dimension).copied().unwrap_or_default()
    }

    /// True when the tone standard deviation is below the configured
    /// threshold. An empty corpus is not tone-consistent.
    pub fn is_tone_consistent(&self) -> bool {
        !self.records.is_empty()
            && self.score_stats(ScoreDimension::Tone).std_dev < self.tone_consistency_threshold
    }

    pub fn compliance_mean(&self) -> f64 {
        self.compliance.mean()
    }

    /// Aggregated convention profile of every record.
    pub fn conventions(&self) -> &ConventionProfile {
        &self.conventions
    }

    pub fn percentage_precision(&self) -> u32 {
        self.percentage_precision
    }

    pub fn tone_consistency_threshold(&self) -> f64 {
        self.tone_consistency_threshold
    }
}

impl Default for CorpusSummary {
    fn default() -> Self {
        Self::new(&CorpusConfig::default())
    }
}

/// Build a summary from records in order.
pub fn summarize(
    records: impl IntoIterator<Item = PromptRecord>,
    config: &CorpusConfig,
) -> Result<CorpusSummary, InputError> {
    let mut summary = CorpusSummary::new(config);
    for record in records {
        summary.push(record)?;
    }
    Ok(summary)
}

/// Merge two summaries: `b`'s records follow `a`'s. Equals summarizing the
/// concatenated records. Settings come from `a`.
pub fn combine(a: CorpusSummary, b: CorpusSummary) -> Result<CorpusSummary, InputError> {
    if let Some(dup) = b.records.iter().find(|r| a.index.contains_key(&r.id)) {
        return Err(InputError::DuplicateId { id: dup.id.clone() });
    }

    let mut merged = a;
    for (category, prompts) in &b.category_prompts {
        *merged.category_prompts.entry(category.clone()).or_default() += prompts;
    }
    for (dim, acc) in &b.scores {
        merged.scores.entry(*dim).or_default().merge(acc);
    }
    merged.compliance.merge(&b.compliance);
    merge_into(&mut merged.conventions, &b.conventions);

    let offset = merged.records.len();
    for (i, record) in b.records.into_iter().enumerate() {
        merged.index.insert(record.id.clone(), offset + i);
        merged.records.push(record);
    }
    Ok(merged)
}

/// Round half away from zero to `precision` decimal places.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
