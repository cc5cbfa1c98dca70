//! Flattened key → value views of records and summaries for tabular or
//! document exporters.
//!
//! Record keys:
//! - `id`, `owner`, `project`, `workspace`, `compliance`
//! - `scores.complexity|clarity|tone|structure|readability`
//! - `stats.word_count|sentence_count|avg_word_length|avg_sentence_length|avg_syllables_per_word|pattern_diversity|section_headers`
//! - `detection.<category>` (match count), `detection.matched` (list)
//! - `excerpts.<category>` (list, text order, empty when unmatched)
//! - `keywords.<category>` (hit count)
//!
//! Summary keys:
//! - `total_prompts`, `tone_consistent`, `dominant_pattern`, `dominant_usage`, `compliance.mean`
//! - `usage.<category>`
//! - `scores.<dimension>.mean`, `scores.<dimension>.std_dev`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusSummary, PromptRecord, ScoreDimension};

/// A single exported cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportValue {
    Null,
    Bool(bool),
    Integer(u64),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<Option<&str>> for ExportValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |v| Self::Text(v.to_string()))
    }
}

/// Flatten one prompt record.
pub fn export_record(record: &PromptRecord) -> BTreeMap<String, ExportValue> {
    let mut row = BTreeMap::new();
    let mut put = |key: String, value: ExportValue| {
        row.insert(key, value);
    };

    put("id".into(), ExportValue::Text(record.id.clone()));
    put("owner".into(), record.metadata.owner.as_deref().into());
    put("project".into(), record.metadata.project.as_deref().into());
    put("workspace".into(), record.metadata.workspace.as_deref().into());
    put("compliance".into(), ExportValue::Number(record.compliance));

    for dim in ScoreDimension::ALL {
        put(
            format!("scores.{}", dim.name()),
            ExportValue::Number(dim.value(&record.scores)),
        );
    }

    let scores = &record.scores;
    let stats = &scores.stats;
    put("stats.word_count".into(), ExportValue::Integer(stats.word_count.into()));
    put("stats.sentence_count".into(), ExportValue::Integer(stats.sentence_count.into()));
    put("stats.avg_word_length".into(), ExportValue::Number(stats.avg_word_length));
    put("stats.avg_sentence_length".into(), ExportValue::Number(stats.avg_sentence_length));
    put(
        "stats.avg_syllables_per_word".into(),
        ExportValue::Number(stats.avg_syllables_per_word),
    );
    put(
        "stats.pattern_diversity".into(),
        ExportValue::Integer(scores.pattern_diversity.into()),
    );
    put(
        "stats.section_headers".into(),
        ExportValue::Integer(scores.section_headers.into()),
    );

    for (category, &count) in &record.detection.counts {
        put(format!("detection.{category}"), ExportValue::Integer(count.into()));
    }
    put(
        "detection.matched".into(),
        ExportValue::List(record.detection.matched.iter().cloned().collect()),
    );
    for category in record.detection.counts.keys() {
        let excerpts = record
            .detection
            .excerpts
            .get(category)
            .map(|e| e.to_vec())
            .unwrap_or_default();
        put(format!("excerpts.{category}"), ExportValue::List(excerpts));
    }

    for (category, &hits) in &scores.keyword_hits {
        put(format!("keywords.{category}"), ExportValue::Integer(hits.into()));
    }

    row
}

/// Flatten corpus-level statistics.
pub fn export_summary(summary: &CorpusSummary) -> BTreeMap<String, ExportValue> {
    let mut row = BTreeMap::new();

    row.insert(
        "total_prompts".to_string(),
        ExportValue::Integer(summary.total_prompts() as u64),
    );
    row.insert(
        "tone_consistent".to_string(),
        ExportValue::Bool(summary.is_tone_consistent()),
    );

    let (dominant, usage) = match summary.dominant_pattern() {
        Some((category, pct)) => (ExportValue::Text(category.to_string()), ExportValue::Number(pct)),
        None => (ExportValue::Null, ExportValue::Null),
    };
    row.insert("dominant_pattern".to_string(), dominant);
    row.insert("dominant_usage".to_string(), usage);
    row.insert(
        "compliance.mean".to_string(),
        ExportValue::Number(summary.compliance_mean()),
    );

    for (category, pct) in summary.usage_percentages() {
        row.insert(format!("usage.{category}"), ExportValue::Number(pct));
    }
    for dim in ScoreDimension::ALL {
        let stats = summary.score_stats(dim);
        row.insert(format!("scores.{}.mean", dim.name()), ExportValue::Number(stats.mean));
        row.insert(
            format!("scores.{}.std_dev", dim.name()),
            ExportValue::Number(stats.std_dev),
        );
    }

    row
}
