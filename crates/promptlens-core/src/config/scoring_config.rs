//! Scoring configuration: coefficients for the five quality scores.
//!
//! The defaults are heuristics, not calibrated values. Every coefficient can be
//! overridden from the `[scoring.*]` tables of `promptlens.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Coefficients for all score dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    pub complexity: ComplexityWeights,
    pub clarity: ClarityWeights,
    pub tone: ToneWeights,
    pub structure: StructureWeights,
    pub readability: ReadabilityWeights,
}

/// Complexity (0-10): weighted linear combination of word length, sentence
/// length and technical keyword hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityWeights {
    /// Average word length that contributes nothing. Default: 3.0.
    pub word_length_baseline: f64,
    /// Points per character of average word length above the baseline. Default: 1.0.
    pub word_length_weight: f64,
    /// Points per word of average sentence length. Default: 0.15.
    pub sentence_length_weight: f64,
    /// Points per technical keyword hit. Default: 0.5.
    pub technical_keyword_weight: f64,
    /// Taxonomy category counted as technical. Default: "technical".
    pub technical_category: String,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            word_length_baseline: 3.0,
            word_length_weight: 1.0,
            sentence_length_weight: 0.15,
            technical_keyword_weight: 0.5,
            technical_category: "technical".to_string(),
        }
    }
}

/// Clarity (0-10): baseline, long-sentence penalty, structural pattern bonuses,
/// length band bonus/penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarityWeights {
    /// Starting score. Default: 5.0.
    pub baseline: f64,
    /// Average sentence length above which the penalty applies. Default: 20.0.
    pub sentence_length_threshold: f64,
    /// Points lost per word above the threshold. Default: 0.2.
    pub sentence_length_penalty: f64,
    /// Bonus per matched pattern category. Default: instructions 1.5, output_format 1.5.
    pub structural_bonus: BTreeMap<String, f64>,
    /// Lower bound of the moderate length band, in words. Default: 50.
    pub moderate_min_words: usize,
    /// Upper bound of the moderate length band, in words. Default: 500.
    pub moderate_max_words: usize,
    /// Bonus for a word count inside the moderate band. Default: 1.0.
    pub moderate_length_bonus: f64,
    /// Word counts below this are extreme. Default: 10.
    pub extreme_min_words: usize,
    /// Word counts above this are extreme. Default: 2000.
    pub extreme_max_words: usize,
    /// Penalty for an extreme word count. Default: 1.0.
    pub extreme_length_penalty: f64,
}

impl Default for ClarityWeights {
    fn default() -> Self {
        let mut structural_bonus = BTreeMap::new();
        structural_bonus.insert("instructions".to_string(), 1.5);
        structural_bonus.insert("output_format".to_string(), 1.5);
        Self {
            baseline: 5.0,
            sentence_length_threshold: 20.0,
            sentence_length_penalty: 0.2,
            structural_bonus,
            moderate_min_words: 50,
            moderate_max_words: 500,
            moderate_length_bonus: 1.0,
            extreme_min_words: 10,
            extreme_max_words: 2000,
            extreme_length_penalty: 1.0,
        }
    }
}

/// Tone (0-10): rewards politeness and directive markers, rewards a single
/// register, penalizes mixed informal/formal markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneWeights {
    /// Neutral score, also used for empty text. Default: 5.0.
    pub baseline: f64,
    pub politeness_category: String,
    pub directive_category: String,
    pub informal_category: String,
    pub formal_category: String,
    /// Points per politeness or directive marker. Default: 0.5.
    pub marker_weight: f64,
    /// Markers counted per kind. Default: 3.
    pub marker_cap: u32,
    /// Bonus when only one register is present. Default: 1.0.
    pub consistent_register_bonus: f64,
    /// Penalty when informal and formal markers co-occur. Default: 2.0.
    pub mixed_register_penalty: f64,
}

impl Default for ToneWeights {
    fn default() -> Self {
        Self {
            baseline: 5.0,
            politeness_category: "politeness".to_string(),
            directive_category: "directive".to_string(),
            informal_category: "informal".to_string(),
            formal_category: "formal".to_string(),
            marker_weight: 0.5,
            marker_cap: 3,
            consistent_register_bonus: 1.0,
            mixed_register_penalty: 2.0,
        }
    }
}

/// Structure (0-10): pattern diversity, section headers, and a bell-shaped
/// length term around a target word-count band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureWeights {
    /// Points at full diversity (every category matched). Default: 6.0.
    pub diversity_weight: f64,
    /// Points per section header. Default: 1.0.
    pub header_bonus: f64,
    /// Headers counted. Default: 3.
    pub header_cap: u32,
    /// Points for a word count inside the target band. Default: 1.0.
    pub length_weight: f64,
    /// Default: 50.
    pub target_min_words: usize,
    /// Default: 400.
    pub target_max_words: usize,
    /// Distance outside the band, in words, at which the length term falls to
    /// `1/e` of its weight. Default: 200.0.
    pub length_spread: f64,
}

impl Default for StructureWeights {
    fn default() -> Self {
        Self {
            diversity_weight: 6.0,
            header_bonus: 1.0,
            header_cap: 3,
            length_weight: 1.0,
            target_min_words: 50,
            target_max_words: 400,
            length_spread: 200.0,
        }
    }
}

/// Readability (0-100): Flesch reading ease coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityWeights {
    pub base: f64,
    pub sentence_length_weight: f64,
    pub syllable_weight: f64,
}

impl Default for ReadabilityWeights {
    fn default() -> Self {
        Self {
            base: 206.835,
            sentence_length_weight: 1.015,
            syllable_weight: 84.6,
        }
    }
}

impl ScoringConfig {
    /// Validate that every coefficient is finite and every band is well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.complexity;
        check_finite("scoring.complexity.word_length_baseline", c.word_length_baseline)?;
        check_finite("scoring.complexity.word_length_weight", c.word_length_weight)?;
        check_finite("scoring.complexity.sentence_length_weight", c.sentence_length_weight)?;
        check_finite("scoring.complexity.technical_keyword_weight", c.technical_keyword_weight)?;

        let cl = &self.clarity;
        check_finite("scoring.clarity.baseline", cl.baseline)?;
        check_finite("scoring.clarity.sentence_length_threshold", cl.sentence_length_threshold)?;
        check_finite("scoring.clarity.sentence_length_penalty", cl.sentence_length_penalty)?;
        check_finite("scoring.clarity.moderate_length_bonus", cl.moderate_length_bonus)?;
        check_finite("scoring.clarity.extreme_length_penalty", cl.extreme_length_penalty)?;
        for (category, bonus) in &cl.structural_bonus {
            check_finite(&format!("scoring.clarity.structural_bonus.{category}"), *bonus)?;
        }
        check_band(
            "scoring.clarity.moderate_min_words",
            cl.moderate_min_words,
            cl.moderate_max_words,
        )?;
        check_band(
            "scoring.clarity.extreme_min_words",
            cl.extreme_min_words,
            cl.extreme_max_words,
        )?;

        let t = &self.tone;
        check_finite("scoring.tone.baseline", t.baseline)?;
        check_finite("scoring.tone.marker_weight", t.marker_weight)?;
        check_finite("scoring.tone.consistent_register_bonus", t.consistent_register_bonus)?;
        check_finite("scoring.tone.mixed_register_penalty", t.mixed_register_penalty)?;

        let s = &self.structure;
        check_finite("scoring.structure.diversity_weight", s.diversity_weight)?;
        check_finite("scoring.structure.header_bonus", s.header_bonus)?;
        check_finite("scoring.structure.length_weight", s.length_weight)?;
        check_band(
            "scoring.structure.target_min_words",
            s.target_min_words,
            s.target_max_words,
        )?;
        if !(s.length_spread.is_finite() && s.length_spread > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.structure.length_spread".to_string(),
                message: "must be a positive number".to_string(),
            });
        }

        let r = &self.readability;
        check_finite("scoring.readability.base", r.base)?;
        check_finite("scoring.readability.sentence_length_weight", r.sentence_length_weight)?;
        check_finite("scoring.readability.syllable_weight", r.syllable_weight)?;
        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite number".to_string(),
        })
    }
}

fn check_band(field: &str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("band minimum {min} exceeds maximum {max}"),
        })
    }
}
