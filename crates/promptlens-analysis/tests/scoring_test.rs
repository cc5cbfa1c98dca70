//! Integration tests for the quality scorer.

use promptlens_analysis::detector::detect;
use promptlens_analysis::library::PatternLibrary;
use promptlens_analysis::scoring::{score, KeywordTaxonomy, QualityScorer, ScoreRecord};
use promptlens_analysis::conventions::HeaderScanner;
use promptlens_core::config::ScoringConfig;

fn score_text(text: &str) -> ScoreRecord {
    let library = PatternLibrary::builtin().unwrap();
    let taxonomy = KeywordTaxonomy::builtin().unwrap();
    score(text, &detect("p", text, &library), &taxonomy)
}

fn assert_bounded(record: &ScoreRecord) {
    for (name, value) in [
        ("complexity", record.complexity),
        ("clarity", record.clarity),
        ("tone", record.tone),
        ("structure", record.structure),
    ] {
        assert!((0.0..=10.0).contains(&value), "{name} out of range: {value}");
    }
    assert!((0.0..=100.0).contains(&record.readability));
}

/// Adding role, instruction and step sentences raises the structure score.
#[test]
fn test_structure_rewards_structural_sentences() {
    let full = score_text(
        "You are a helpful assistant. Please follow these steps: Step 1: Read the ticket. Step 2: Draft a reply.",
    );
    let reduced = score_text("Read the ticket. Draft a reply.");
    assert!(full.pattern_diversity >= 3);
    assert!(full.structure > reduced.structure);
}

/// Empty and whitespace-only text yield the neutral baseline.
#[test]
fn test_empty_and_whitespace_baseline() {
    for text in ["", "   \n\t  "] {
        let record = score_text(text);
        assert_eq!(record.stats.word_count, 0);
        assert_eq!(record.stats.sentence_count, 0);
        assert_eq!(record.complexity, 0.0);
        assert_eq!(record.clarity, 0.0);
        assert_eq!(record.tone, 5.0);
        assert_eq!(record.structure, 0.0);
        assert_eq!(record.readability, 0.0);
    }
}

#[test]
fn test_degenerate_inputs_stay_in_bounds() {
    let long = "antidisestablishmentarianism ".repeat(5000);
    for text in ["x", "?!.,;", "12345 67890", "@@@ {{}} <>", long.as_str()] {
        assert_bounded(&score_text(text));
    }
}

#[test]
fn test_readability_simple_beats_dense() {
    let simple = score_text("The cat sat. The dog ran. We had fun.");
    let dense = score_text(
        "Comprehensive organizational infrastructure modernization necessitates considerable interdepartmental collaboration.",
    );
    assert!(simple.readability > dense.readability);
    assert!(dense.complexity > simple.complexity);
}

#[test]
fn test_politeness_and_directives_raise_tone() {
    let neutral = score_text("Summarize the document.");
    let polite = score_text("Please summarize the document. You must keep it short.");
    assert!(polite.tone > neutral.tone);
    assert!(polite.keyword_hits("politeness") >= 1);
    assert!(polite.keyword_hits("directive") >= 1);
}

#[test]
fn test_section_headers_counted() {
    let record = score_text("Role: analyst\nTask: review\n# Notes\nplain line");
    assert_eq!(record.section_headers, 3);
}

#[test]
fn test_scores_are_deterministic() {
    let text = "You are an analyst. Task: extract the KPI table as JSON. Do not invent numbers.";
    assert_eq!(score_text(text), score_text(text));
}

/// Coefficients come from configuration.
#[test]
fn test_custom_tone_baseline() {
    let mut config = ScoringConfig::default();
    config.tone.baseline = 7.0;
    let scorer = QualityScorer::new(config, HeaderScanner::default());
    let library = PatternLibrary::builtin().unwrap();
    let taxonomy = KeywordTaxonomy::builtin().unwrap();

    let empty = scorer.score("", &detect("e", "", &library), &taxonomy);
    assert_eq!(empty.tone, 7.0);
}
