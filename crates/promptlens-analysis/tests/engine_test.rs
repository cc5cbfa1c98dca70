//! Integration tests for the analyzer entry points, batch policies, exports
//! and search.

use std::sync::Arc;

use promptlens_analysis::export::{export_record, export_summary, ExportValue};
use promptlens_analysis::search::{search_prompts, SearchMode};
use promptlens_analysis::{Analyzer, KeywordTaxonomy, PatternLibrary, PromptInput, PromptMetadata};
use promptlens_core::config::{BatchPolicy, PromptLensConfig};
use promptlens_core::errors::{AnalysisError, InputError, LibraryError, LensErrorCode};

fn mixed_inputs() -> Vec<PromptInput> {
    vec![
        PromptInput::new("a", "You are a support agent. Follow these steps."),
        PromptInput {
            id: "b".to_string(),
            text: None,
            metadata: PromptMetadata::default(),
        },
        PromptInput::new("a", "A second prompt reusing an id."),
        PromptInput::new("   ", "Blank id."),
        PromptInput::new("c", "<Context>Order 42.</Context> Draft a reply."),
    ]
}

fn config_with(policy: BatchPolicy, parallel: bool) -> PromptLensConfig {
    let mut config = PromptLensConfig::default();
    config.analysis.batch_policy = Some(policy);
    config.analysis.parallel = Some(parallel);
    config
}

#[test]
fn test_skip_invalid_reports_failures_in_input_order() {
    let analyzer = Analyzer::from_config(config_with(BatchPolicy::SkipInvalid, true)).unwrap();
    let result = analyzer.analyze_corpus(&mixed_inputs()).unwrap();

    assert_eq!(result.failure_count(), 3);
    assert_eq!(
        result.failures,
        vec![
            InputError::MissingText { id: "b".to_string() },
            InputError::DuplicateId { id: "a".to_string() },
            InputError::BlankId,
        ]
    );

    let ids: Vec<&str> = result.data.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    // The first "a" is kept; its duplicate never reaches the aggregates.
    assert!(result.data.record("a").unwrap().detection.is_matched("role_definition"));
    assert_eq!(result.data.usage_percentage("context"), 50.0);
}

#[test]
fn test_fail_fast_aborts_on_first_invalid() {
    let analyzer = Analyzer::from_config(config_with(BatchPolicy::FailFast, false)).unwrap();
    let err = analyzer.analyze_corpus(&mixed_inputs()).unwrap_err();
    match err {
        AnalysisError::Input(InputError::MissingText { id }) => assert_eq!(id, "b"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fail_fast_passes_clean_corpus() {
    let analyzer = Analyzer::from_config(config_with(BatchPolicy::FailFast, true)).unwrap();
    let inputs = vec![
        PromptInput::new("x", "Summarize the report."),
        PromptInput::new("y", "Translate the memo."),
    ];
    let result = analyzer.analyze_corpus(&inputs).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.data.total_prompts(), 2);
}

/// Parallel and sequential runs fold in input order and agree exactly.
#[test]
fn test_parallel_matches_sequential() {
    let inputs: Vec<PromptInput> = (0..64)
        .map(|i| {
            let text = match i % 4 {
                0 => format!("You are agent {i}. Step 1: read {{{{ticket_{i}}}}}."),
                1 => format!("<Task>Handle case {i}</Task> Return as JSON."),
                2 => format!("# Notes\n- item {i}\nPlease be precise."),
                _ => format!("Hey, kinda quick one number {i}."),
            };
            PromptInput::new(format!("p{i}"), text)
        })
        .collect();

    let parallel = Analyzer::from_config(config_with(BatchPolicy::SkipInvalid, true))
        .unwrap()
        .analyze_corpus(&inputs)
        .unwrap();
    let sequential = Analyzer::from_config(config_with(BatchPolicy::SkipInvalid, false))
        .unwrap()
        .analyze_corpus(&inputs)
        .unwrap();

    assert_eq!(parallel.data.records(), sequential.data.records());
    assert_eq!(parallel.data.usage_percentages(), sequential.data.usage_percentages());
    assert_eq!(parallel.data.conventions(), sequential.data.conventions());
    assert_eq!(export_summary(&parallel.data), export_summary(&sequential.data));
}

#[test]
fn test_from_config_loads_library_and_taxonomy_files() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("library.toml");
    std::fs::write(
        &library_path,
        r#"
[[categories]]
name = "greeting"
rules = [{ pattern = "hello" }]

[[categories]]
name = "ticket_ref"
rules = [{ pattern = '#\d+', regex = true }]
"#,
    )
    .unwrap();
    let taxonomy_path = dir.path().join("taxonomy.json");
    std::fs::write(
        &taxonomy_path,
        r#"{"categories":[{"name":"support","keywords":["ticket","refund"]}]}"#,
    )
    .unwrap();

    let mut config = PromptLensConfig::default();
    config.analysis.library_path = Some(library_path.display().to_string());
    config.analysis.taxonomy_path = Some(taxonomy_path.display().to_string());
    let analyzer = Analyzer::from_config(config).unwrap();

    let names: Vec<&str> = analyzer.library().category_names().collect();
    assert_eq!(names, vec!["greeting", "ticket_ref"]);
    assert!(analyzer.taxonomy().has_category("support"));

    let record = analyzer
        .analyze_prompt("p", "Hello! Ticket #42 needs a refund.", PromptMetadata::default())
        .unwrap();
    assert_eq!(record.detection.count("greeting"), 1);
    assert_eq!(record.detection.count("ticket_ref"), 1);
    assert_eq!(record.scores.keyword_hits("support"), 2);
}

#[test]
fn test_from_config_missing_library_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PromptLensConfig::default();
    config.analysis.library_path = Some(dir.path().join("nope.toml").display().to_string());

    let err = Analyzer::from_config(config).unwrap_err();
    assert!(matches!(err, AnalysisError::Library(LibraryError::Unreadable { .. })));
    assert_eq!(err.error_code(), "LIBRARY_ERROR");
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let mut config = PromptLensConfig::default();
    config.analysis.excerpt_max_chars = Some(0);
    let err = Analyzer::from_config(config).unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
fn test_shared_tables_across_analyzers() {
    let library = Arc::new(PatternLibrary::builtin().unwrap());
    let taxonomy = Arc::new(KeywordTaxonomy::builtin().unwrap());
    let first = Analyzer::new(library.clone(), taxonomy.clone(), PromptLensConfig::default());
    let second = first.clone();

    assert!(Arc::ptr_eq(first.library(), second.library()));
    assert_eq!(Arc::strong_count(&library), 3);

    let a = first
        .analyze_prompt("p", "You are a reviewer.", PromptMetadata::default())
        .unwrap();
    let b = second
        .analyze_prompt("p", "You are a reviewer.", PromptMetadata::default())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_excerpt_limit_from_config() {
    let mut config = PromptLensConfig::default();
    config.analysis.excerpt_limit = Some(2);
    let analyzer = Analyzer::from_config(config).unwrap();
    let record = analyzer
        .analyze_prompt("p", "Step 1 a. Step 2 b. Step 3 c.", PromptMetadata::default())
        .unwrap();
    assert_eq!(record.detection.count("step_by_step"), 3);
    assert_eq!(record.detection.excerpts["step_by_step"].len(), 2);
}

#[test]
fn test_export_record_keys() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let record = analyzer
        .analyze_prompt(
            "p1",
            "<Context>Order 42.</Context> Return as JSON.",
            PromptMetadata::default().with_owner("Jane"),
        )
        .unwrap();
    let row = export_record(&record);

    assert_eq!(row["id"], ExportValue::Text("p1".to_string()));
    assert_eq!(row["owner"], ExportValue::Text("Jane".to_string()));
    assert_eq!(row["project"], ExportValue::Null);
    assert_eq!(row["detection.context"], ExportValue::Integer(1));
    assert_eq!(row["detection.examples"], ExportValue::Integer(0));
    assert!(matches!(row["scores.readability"], ExportValue::Number(_)));
    assert!(matches!(row["keywords.technical"], ExportValue::Integer(n) if n >= 1));
    match &row["detection.matched"] {
        ExportValue::List(matched) => assert!(matched.contains(&"context".to_string())),
        other => panic!("unexpected value: {other:?}"),
    }
    assert_eq!(
        row["excerpts.context"],
        ExportValue::List(vec!["<Context>".to_string()])
    );
    assert_eq!(row["excerpts.examples"], ExportValue::List(Vec::new()));
    for category in record.detection.counts.keys() {
        assert!(row.contains_key(&format!("excerpts.{category}")), "{category}");
    }
}

#[test]
fn test_export_summary_keys() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let inputs = vec![
        PromptInput::new("p1", "<Context>Order 42.</Context> Draft a reply."),
        PromptInput::new("p2", "Summarize the quarterly report."),
    ];
    let summary = analyzer.analyze_corpus(&inputs).unwrap().data;
    let row = export_summary(&summary);

    assert_eq!(row["total_prompts"], ExportValue::Integer(2));
    assert_eq!(row["usage.context"], ExportValue::Number(50.0));
    assert_eq!(row["dominant_pattern"], ExportValue::Text("context".to_string()));
    assert!(row.contains_key("scores.tone.std_dev"));
}

#[test]
fn test_search_literal_and_regex() {
    let inputs = vec![
        PromptInput::new("a", "Return JSON. Always return json when asked."),
        PromptInput::new("b", "Write a poem about the sea."),
        PromptInput {
            id: "c".to_string(),
            text: None,
            metadata: PromptMetadata::default(),
        },
    ];

    let literal = search_prompts(&inputs, "json", SearchMode::Literal).unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].id, "a");
    assert_eq!(literal[0].hits, 2);
    assert_eq!(literal[0].excerpts.len(), 2);

    let regex = search_prompts(&inputs, r"\b(?:poem|sea)\b", SearchMode::Regex).unwrap();
    assert_eq!(regex.len(), 1);
    assert_eq!(regex[0].hits, 2);

    // Metacharacters are literal in literal mode.
    assert!(search_prompts(&inputs, "a.*", SearchMode::Literal).unwrap().is_empty());

    let err = search_prompts(&inputs, "(unclosed", SearchMode::Regex).unwrap_err();
    assert!(matches!(err, InputError::InvalidQuery { .. }));
    assert!(matches!(
        search_prompts(&inputs, "  ", SearchMode::Literal),
        Err(InputError::InvalidQuery { .. })
    ));
}
