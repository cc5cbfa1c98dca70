//! Analyzer: single-prompt and corpus entry points over shared, read-only
//! library and taxonomy tables.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use promptlens_core::config::{BatchPolicy, PromptLensConfig};
use promptlens_core::errors::{AnalysisError, BatchResult, InputError, LibraryError};

use crate::conventions::{ConventionDiscoverer, HeaderScanner};
use crate::corpus::{compliance_score, CorpusSummary, PromptInput, PromptMetadata, PromptRecord};
use crate::detector::{detect_with_limits, ExcerptLimits};
use crate::library::{LibraryDefinition, PatternLibrary};
use crate::scoring::{KeywordTaxonomy, QualityScorer, TaxonomyDefinition};

/// Analysis entry point.
///
/// Cloning is cheap: the library and taxonomy are shared through `Arc`, and
/// nothing is mutated after construction, so one analyzer can serve many
/// corpora concurrently.
#[derive(Debug, Clone)]
pub struct Analyzer {
    library: Arc<PatternLibrary>,
    taxonomy: Arc<KeywordTaxonomy>,
    discoverer: ConventionDiscoverer,
    scorer: QualityScorer,
    limits: ExcerptLimits,
    compliance_weights: BTreeMap<String, f64>,
    config: PromptLensConfig,
}

impl Analyzer {
    /// Build an analyzer from explicit tables and configuration.
    pub fn new(
        library: Arc<PatternLibrary>,
        taxonomy: Arc<KeywordTaxonomy>,
        config: PromptLensConfig,
    ) -> Self {
        let headers = HeaderScanner::new(config.analysis.effective_header_keywords());
        Self {
            discoverer: ConventionDiscoverer::new(headers.clone()),
            scorer: QualityScorer::new(config.scoring.clone(), headers),
            limits: ExcerptLimits {
                max_excerpts: config.analysis.effective_excerpt_limit(),
                max_chars: config.analysis.effective_excerpt_max_chars(),
            },
            compliance_weights: config.corpus.effective_compliance_weights(),
            library,
            taxonomy,
            config,
        }
    }

    /// Built-in library and taxonomy with default configuration.
    pub fn with_defaults() -> Result<Self, LibraryError> {
        Ok(Self::new(
            Arc::new(PatternLibrary::builtin()?),
            Arc::new(KeywordTaxonomy::builtin()?),
            PromptLensConfig::default(),
        ))
    }

    /// Build from configuration, loading the library and taxonomy from the
    /// configured paths or falling back to the built-ins.
    pub fn from_config(config: PromptLensConfig) -> Result<Self, AnalysisError> {
        PromptLensConfig::validate(&config)?;

        let library = match config.analysis.library_path.as_deref() {
            Some(path) => {
                info!(path, "loading pattern library");
                PatternLibrary::from_definition(&LibraryDefinition::from_path(Path::new(path))?)?
            }
            None => PatternLibrary::builtin()?,
        };
        let taxonomy = match config.analysis.taxonomy_path.as_deref() {
            Some(path) => {
                info!(path, "loading keyword taxonomy");
                KeywordTaxonomy::from_definition(&TaxonomyDefinition::from_path(Path::new(path))?)?
            }
            None => KeywordTaxonomy::builtin()?,
        };

        Ok(Self::new(Arc::new(library), Arc::new(taxonomy), config))
    }

    pub fn library(&self) -> &Arc<PatternLibrary> {
        &self.library
    }

    pub fn taxonomy(&self) -> &Arc<KeywordTaxonomy> {
        &self.taxonomy
    }

    pub fn config(&self) -> &PromptLensConfig {
        &self.config
    }

    /// Analyze one prompt. Rejects a blank id before looking at the text.
    pub fn analyze_prompt(
        &self,
        id: &str,
        text: &str,
        metadata: PromptMetadata,
    ) -> Result<PromptRecord, InputError> {
        if id.trim().is_empty() {
            return Err(InputError::BlankId);
        }

        let detection = detect_with_limits(id, text, &self.library, self.limits);
        let conventions = self.discoverer.discover(text);
        let scores = self.scorer.score(text, &detection, &self.taxonomy);
        let compliance = compliance_score(&detection, &self.compliance_weights);

        debug!(
            id,
            matched = detection.diversity(),
            words = scores.stats.word_count,
            "prompt analyzed"
        );

        Ok(PromptRecord {
            id: id.to_string(),
            metadata,
            detection,
            conventions,
            scores,
            compliance,
        })
    }

    /// Analyze a corpus input row; missing text is an input error.
    pub fn analyze_input(&self, input: &PromptInput) -> Result<PromptRecord, InputError> {
        if input.id.trim().is_empty() {
            return Err(InputError::BlankId);
        }
        let text = input.text.as_deref().ok_or_else(|| InputError::MissingText {
            id: input.id.clone(),
        })?;
        self.analyze_prompt(&input.id, text, input.metadata.clone())
    }

    /// Analyze a corpus under the configured batch policy.
    ///
    /// Prompts are analyzed independently (in parallel unless disabled) and
    /// folded in input order, so the summary does not depend on scheduling.
    /// With `skip_invalid`, invalid or duplicate prompts are left out and
    /// listed in `failures`. With `fail_fast`, the first one in input order
    /// aborts the call.
    pub fn analyze_corpus(
        &self,
        inputs: &[PromptInput],
    ) -> Result<BatchResult<CorpusSummary>, AnalysisError> {
        let start = Instant::now();
        let policy = self.config.analysis.effective_batch_policy();

        let results = if self.config.analysis.effective_parallel() {
            self.analyze_parallel(inputs)
        } else {
            self.analyze_sequential(inputs)
        };

        let mut summary = CorpusSummary::new(&self.config.corpus);
        let mut failures = Vec::new();

        for outcome in results {
            let outcome = outcome.and_then(|record| summary.push(record));
            if let Err(error) = outcome {
                match policy {
                    BatchPolicy::FailFast => {
                        warn!(error = %error, "aborting corpus analysis");
                        return Err(error.into());
                    }
                    BatchPolicy::SkipInvalid => {
                        warn!(error = %error, "skipping invalid prompt");
                        failures.push(error);
                    }
                }
            }
        }

        info!(
            prompts = summary.total_prompts(),
            skipped = failures.len(),
            policy = %policy,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus analyzed"
        );

        let mut result = BatchResult::new(summary);
        for failure in failures {
            result.add_failure(failure);
        }
        Ok(result)
    }

    fn analyze_parallel(&self, inputs: &[PromptInput]) -> Vec<Result<PromptRecord, InputError>> {
        inputs.par_iter().map(|input| self.analyze_input(input)).collect()
    }

    fn analyze_sequential(&self, inputs: &[PromptInput]) -> Vec<Result<PromptRecord, InputError>> {
        inputs.iter().map(|input| self.analyze_input(input)).collect()
    }
}
