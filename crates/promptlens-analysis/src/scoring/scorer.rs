//! The five quality scores.
//!
//! Every coefficient comes from [`ScoringConfig`]; the scorer holds no other
//! state, so scores are pure functions of text, detection and taxonomy.

use promptlens_core::config::ScoringConfig;
use promptlens_core::constants::{MAX_READABILITY, MAX_SCORE};

use super::taxonomy::KeywordTaxonomy;
use super::text_stats::TextStats;
use super::types::ScoreRecord;
use crate::conventions::HeaderScanner;
use crate::detector::DetectionRecord;

/// Score with default coefficients and header keywords.
pub fn score(text: &str, detection: &DetectionRecord, taxonomy: &KeywordTaxonomy) -> ScoreRecord {
    QualityScorer::default().score(text, detection, taxonomy)
}

#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    config: ScoringConfig,
    headers: HeaderScanner,
}

impl QualityScorer {
    pub fn new(config: ScoringConfig, headers: HeaderScanner) -> Self {
        Self { config, headers }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        text: &str,
        detection: &DetectionRecord,
        taxonomy: &KeywordTaxonomy,
    ) -> ScoreRecord {
        let stats = TextStats::from_text(text);
        let keyword_hits = taxonomy.hits(text);
        let section_headers = u32::try_from(self.headers.count(text)).unwrap_or(u32::MAX);
        let pattern_diversity = u32::try_from(detection.diversity()).unwrap_or(u32::MAX);

        let mut record = ScoreRecord {
            stats,
            pattern_diversity,
            section_headers,
            keyword_hits,
            tone: clamp(self.config.tone.baseline, MAX_SCORE),
            ..Default::default()
        };

        // No words: neutral baseline, nothing divided.
        if stats.is_empty() {
            return record;
        }

        record.complexity = self.complexity(&record);
        record.clarity = self.clarity(&record, detection);
        record.tone = self.tone(&record);
        record.structure = self.structure(&record, detection);
        record.readability = self.readability(&stats);
        record
    }

    fn complexity(&self, record: &ScoreRecord) -> f64 {
        let w = &self.config.complexity;
        let stats = &record.stats;
        let technical = f64::from(record.keyword_hits(&w.technical_category));

        let raw = w.word_length_weight * (stats.avg_word_length - w.word_length_baseline).max(0.0)
            + w.sentence_length_weight * stats.avg_sentence_length
            + w.technical_keyword_weight * technical;
        clamp(raw, MAX_SCORE)
    }

    fn clarity(&self, record: &ScoreRecord, detection: &DetectionRecord) -> f64 {
        let w = &self.config.clarity;
        let stats = &record.stats;
        let words = stats.word_count as usize;

        let mut raw = w.baseline;
        raw -= w.sentence_length_penalty
            * (stats.avg_sentence_length - w.sentence_length_threshold).max(0.0);
        raw += w
            .structural_bonus
            .iter()
            .filter(|(category, _)| detection.is_matched(category))
            .map(|(_, bonus)| bonus)
            .sum::<f64>();

        if (w.moderate_min_words..=w.moderate_max_words).contains(&words) {
            raw += w.moderate_length_bonus;
        }
        if words < w.extreme_min_words || words > w.extreme_max_words {
            raw -= w.extreme_length_penalty;
        }
        clamp(raw, MAX_SCORE)
    }

    fn tone(&self, record: &ScoreRecord) -> f64 {
        let w = &self.config.tone;
        let capped = |category: &str| f64::from(record.keyword_hits(category).min(w.marker_cap));

        let informal = record.keyword_hits(&w.informal_category) > 0;
        let formal = record.keyword_hits(&w.formal_category) > 0;

        let mut raw = w.baseline
            + w.marker_weight * capped(&w.politeness_category)
            + w.marker_weight * capped(&w.directive_category);
        if informal && formal {
            raw -= w.mixed_register_penalty;
        } else if informal || formal {
            raw += w.consistent_register_bonus;
        }
        clamp(raw, MAX_SCORE)
    }

    fn structure(&self, record: &ScoreRecord, detection: &DetectionRecord) -> f64 {
        let w = &self.config.structure;
        let total = detection.category_count();
        let diversity = if total == 0 {
            0.0
        } else {
            f64::from(record.pattern_diversity) / total as f64
        };

        let headers = f64::from(record.section_headers.min(w.header_cap));

        let words = record.stats.word_count as f64;
        let distance = if words < w.target_min_words as f64 {
            w.target_min_words as f64 - words
        } else if words > w.target_max_words as f64 {
            words - w.target_max_words as f64
        } else {
            0.0
        };
        let length_fit = (-(distance / w.length_spread).powi(2)).exp();

        let raw = w.diversity_weight * diversity + w.header_bonus * headers + w.length_weight * length_fit;
        clamp(raw, MAX_SCORE)
    }

    /// Flesch reading ease.
    fn readability(&self, stats: &TextStats) -> f64 {
        let w = &self.config.readability;
        let raw = w.base
            - w.sentence_length_weight * stats.avg_sentence_length
            - w.syllable_weight * stats.avg_syllables_per_word;
        clamp(raw, MAX_READABILITY)
    }
}

/// Clamp to `[0, max]`; non-finite values become 0.
fn clamp(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::detect;
    use crate::library::PatternLibrary;

    fn fixtures() -> (PatternLibrary, KeywordTaxonomy) {
        (
            PatternLibrary::builtin().unwrap(),
            KeywordTaxonomy::builtin().unwrap(),
        )
    }

    #[test]
    fn test_empty_baseline() {
        let (library, taxonomy) = fixtures();
        let record = score("", &detect("e", "", &library), &taxonomy);
        assert_eq!(record.complexity, 0.0);
        assert_eq!(record.clarity, 0.0);
        assert_eq!(record.tone, 5.0);
        assert_eq!(record.structure, 0.0);
        assert_eq!(record.readability, 0.0);
        assert_eq!(record.stats.word_count, 0);
        assert_eq!(record.keyword_hits.len(), taxonomy.categories().len());
    }

    #[test]
    fn test_mixed_register_lowers_tone() {
        let (library, taxonomy) = fixtures();
        let formal = "Therefore the summary shall be brief.";
        let mixed = "Hey, therefore the summary shall be brief.";
        let a = score(formal, &detect("a", formal, &library), &taxonomy);
        let b = score(mixed, &detect("b", mixed, &library), &taxonomy);
        assert!(a.tone > b.tone);
    }

    #[test]
    fn test_technical_terms_raise_complexity() {
        let (library, taxonomy) = fixtures();
        let plain = "Tell me a story about a dog.";
        let technical = "Query the API endpoint and return the JSON schema.";
        let a = score(plain, &detect("a", plain, &library), &taxonomy);
        let b = score(technical, &detect("b", technical, &library), &taxonomy);
        assert!(b.complexity > a.complexity);
    }

    #[test]
    fn test_instructions_raise_clarity() {
        let (library, taxonomy) = fixtures();
        let bare = "Summarize the attached report for the board.";
        let structured = "Task: Summarize the attached report for the board.";
        let a = score(bare, &detect("a", bare, &library), &taxonomy);
        let b = score(structured, &detect("b", structured, &library), &taxonomy);
        assert!(b.clarity > a.clarity);
    }

    #[test]
    fn test_clamp_handles_nan() {
        assert_eq!(clamp(f64::NAN, 10.0), 0.0);
        assert_eq!(clamp(12.0, 10.0), 10.0);
        assert_eq!(clamp(-1.0, 10.0), 0.0);
    }
}
