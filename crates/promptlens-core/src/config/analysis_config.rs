//! Analysis configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCERPT_LIMIT, DEFAULT_EXCERPT_MAX_CHARS, DEFAULT_HEADER_KEYWORDS};

/// How a corpus call treats prompts that fail input validation.
///
/// The policy applies to the whole call; it is never mixed within one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Skip the prompt and report it in the batch failures.
    #[default]
    SkipInvalid,
    /// Abort the call on the first invalid prompt in input order.
    FailFast,
}

impl BatchPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SkipInvalid => "skip_invalid",
            Self::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for BatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "skip_invalid" | "skip" => Ok(Self::SkipInvalid),
            "fail_fast" | "fail" => Ok(Self::FailFast),
            other => Err(format!("unknown batch policy '{other}'")),
        }
    }
}

/// Configuration for per-prompt analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum excerpts kept per category. Default: 5.
    pub excerpt_limit: Option<usize>,
    /// Maximum characters per excerpt. Default: 80.
    pub excerpt_max_chars: Option<usize>,
    /// Invalid-prompt handling for corpus calls. Default: skip_invalid.
    pub batch_policy: Option<BatchPolicy>,
    /// Analyze corpus prompts on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Section header keywords (case-insensitive, matched before a colon).
    #[serde(default)]
    pub header_keywords: Vec<String>,
    /// Path to a pattern library definition (TOML or JSON). Default: built-in library.
    pub library_path: Option<String>,
    /// Path to a keyword taxonomy definition (TOML or JSON). Default: built-in taxonomy.
    pub taxonomy_path: Option<String>,
}

impl AnalysisConfig {
    /// Returns the effective excerpt limit, defaulting to 5.
    pub fn effective_excerpt_limit(&self) -> usize {
        self.excerpt_limit.unwrap_or(DEFAULT_EXCERPT_LIMIT)
    }

    /// Returns the effective excerpt length, defaulting to 80 characters.
    pub fn effective_excerpt_max_chars(&self) -> usize {
        self.excerpt_max_chars.unwrap_or(DEFAULT_EXCERPT_MAX_CHARS)
    }

    /// Returns the effective batch policy, defaulting to `SkipInvalid`.
    pub fn effective_batch_policy(&self) -> BatchPolicy {
        self.batch_policy.unwrap_or_default()
    }

    /// Returns whether corpus analysis runs in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns the configured header keywords, or the built-in list when none are set.
    pub fn effective_header_keywords(&self) -> Vec<String> {
        if self.header_keywords.is_empty() {
            DEFAULT_HEADER_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            self.header_keywords.clone()
        }
    }
}
