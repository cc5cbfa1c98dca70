//! Top-level PromptLens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, BatchPolicy, CorpusConfig, ScoringConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PROMPTLENS_*`)
/// 3. Project config (`promptlens.toml` in the project root)
/// 4. User config (`~/.promptlens/config.toml`)
/// 5. Compiled defaults
///
/// Files are merged table by table, so a project file that sets only
/// `[scoring.tone] baseline` keeps every other tone coefficient from the
/// user file or the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptLensConfig {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub corpus: CorpusConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub excerpt_limit: Option<usize>,
    pub batch_policy: Option<BatchPolicy>,
    pub parallel: Option<bool>,
    pub library_path: Option<String>,
    pub taxonomy_path: Option<String>,
}

impl PromptLensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::read_table(&user_config_path) {
                    Ok(table) => merge_tables(&mut merged, table),
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    // An unreadable user file is not fatal; defaults still apply.
                    Err(_) => {}
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            let table = Self::read_table(&project_config_path)?;
            merge_tables(&mut merged, table);
        }

        let mut config: PromptLensConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string, without env or file layers.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PromptLensConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PromptLensConfig) -> Result<(), ConfigError> {
        if let Some(chars) = config.analysis.excerpt_max_chars {
            if chars == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.excerpt_max_chars".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if config
            .analysis
            .header_keywords
            .iter()
            .any(|k| k.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.header_keywords".to_string(),
                message: "keywords must not be blank".to_string(),
            });
        }
        if let Some(threshold) = config.corpus.tone_consistency_threshold {
            if !(threshold.is_finite() && threshold >= 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "corpus.tone_consistency_threshold".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if let Some(precision) = config.corpus.percentage_precision {
            if precision > 6 {
                return Err(ConfigError::ValidationFailed {
                    field: "corpus.percentage_precision".to_string(),
                    message: "must be between 0 and 6".to_string(),
                });
            }
        }
        for (category, weight) in &config.corpus.compliance_weights {
            if !(weight.is_finite() && *weight >= 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("corpus.compliance_weights.{category}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        for rule in &config.corpus.insight_rules {
            if !(0.0..=100.0).contains(&rule.threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("corpus.insight_rules.{}", rule.category),
                    message: "threshold must be between 0 and 100".to_string(),
                });
            }
        }
        config.scoring.validate()
    }

    /// Returns the user config path: `~/.promptlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Read a TOML file into a table.
    fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        content
            .parse::<toml::Table>()
            .map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    /// Apply environment variable overrides.
    /// Pattern: `PROMPTLENS_EXCERPT_LIMIT`, `PROMPTLENS_BATCH_POLICY`, etc.
    fn apply_env_overrides(config: &mut PromptLensConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PROMPTLENS_EXCERPT_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.excerpt_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PROMPTLENS_BATCH_POLICY") {
            let policy = val
                .parse::<BatchPolicy>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "PROMPTLENS_BATCH_POLICY".to_string(),
                    message,
                })?;
            config.analysis.batch_policy = Some(policy);
        }
        if let Ok(val) = std::env::var("PROMPTLENS_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PROMPTLENS_LIBRARY_PATH") {
            config.analysis.library_path = Some(val);
        }
        if let Ok(val) = std::env::var("PROMPTLENS_TAXONOMY_PATH") {
            config.analysis.taxonomy_path = Some(val);
        }
        if let Ok(val) = std::env::var("PROMPTLENS_TONE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.corpus.tone_consistency_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PROMPTLENS_PERCENTAGE_PRECISION") {
            if let Ok(v) = val.parse::<u32>() {
                config.corpus.percentage_precision = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PromptLensConfig, cli: &CliOverrides) {
        if let Some(v) = cli.excerpt_limit {
            config.analysis.excerpt_limit = Some(v);
        }
        if let Some(v) = cli.batch_policy {
            config.analysis.batch_policy = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.analysis.parallel = Some(v);
        }
        if let Some(ref v) = cli.library_path {
            config.analysis.library_path = Some(v.clone());
        }
        if let Some(ref v) = cli.taxonomy_path {
            config.analysis.taxonomy_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Deep-merge `overlay` into `base`. Nested tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Returns the user-level config directory: `~/.promptlens/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".promptlens"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
