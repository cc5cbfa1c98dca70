//! Corpus filtering by metadata and metric predicates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::summary::CorpusSummary;
use super::types::PromptRecord;

/// Conjunctive filter. Unset fields do not constrain.
///
/// Accepts both snake_case and the camelCase keys used by front ends
/// (`minWords`, `requiredPatterns`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub owner: Option<String>,
    pub project: Option<String>,
    #[serde(alias = "minWords")]
    pub min_words: Option<u32>,
    #[serde(alias = "maxWords")]
    pub max_words: Option<u32>,
    /// Every listed category must have at least one match.
    #[serde(alias = "requiredPatterns")]
    pub required_patterns: BTreeSet<String>,
    /// The keyword category must have at least one hit.
    #[serde(alias = "requiredKeywordCategory")]
    pub required_keyword_category: Option<String>,
}

impl FilterSpec {
    pub fn matches(&self, record: &PromptRecord) -> bool {
        let words = record.scores.stats.word_count;

        self.owner
            .as_ref()
            .map_or(true, |o| record.metadata.owner.as_ref() == Some(o))
            && self
                .project
                .as_ref()
                .map_or(true, |p| record.metadata.project.as_ref() == Some(p))
            && self.min_words.map_or(true, |min| words >= min)
            && self.max_words.map_or(true, |max| words <= max)
            && self
                .required_patterns
                .iter()
                .all(|category| record.detection.count(category) > 0)
            && self
                .required_keyword_category
                .as_ref()
                .map_or(true, |category| record.scores.keyword_hits(category) > 0)
    }
}

/// Records satisfying `predicate`, in corpus order.
pub fn filter<'s, F>(summary: &'s CorpusSummary, predicate: F) -> Vec<&'s PromptRecord>
where
    F: Fn(&PromptRecord) -> bool,
{
    summary.records().iter().filter(|r| predicate(*r)).collect()
}

/// Ids of records matching `spec`, in corpus order. Empty when nothing matches.
pub fn filter_corpus(summary: &CorpusSummary, spec: &FilterSpec) -> Vec<String> {
    filter(summary, |r| spec.matches(r))
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_aliases() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"owner":"Jane","minWords":20,"maxWords":100,"requiredPatterns":["context"]}"#,
        )
        .unwrap();
        assert_eq!(spec.owner.as_deref(), Some("Jane"));
        assert_eq!(spec.min_words, Some(20));
        assert_eq!(spec.max_words, Some(100));
        assert!(spec.required_patterns.contains("context"));
        assert_eq!(spec.required_keyword_category, None);
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        let record = PromptRecord {
            id: "p".to_string(),
            metadata: Default::default(),
            detection: Default::default(),
            conventions: Default::default(),
            scores: Default::default(),
            compliance: 0.0,
        };
        assert!(FilterSpec::default().matches(&record));
    }
}
