//! Keyword taxonomy: named keyword sets matched with a single Aho-Corasick
//! automaton, case-insensitively and on word boundaries.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};

use promptlens_core::errors::LibraryError;

use crate::library::definition::read_definition;

/// One keyword category as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// ```toml
/// [[categories]]
/// name = "technical"
/// keywords = ["api", "json", "schema"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    #[serde(default)]
    pub categories: Vec<KeywordCategoryDefinition>,
}

impl TaxonomyDefinition {
    pub fn from_toml_str(source: &str) -> Result<Self, LibraryError> {
        toml::from_str(source).map_err(|e| LibraryError::Unparseable {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a definition file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, LibraryError> {
        read_definition(path)
    }
}

/// Compiled keyword taxonomy.
#[derive(Debug, Clone)]
pub struct KeywordTaxonomy {
    categories: Vec<String>,
    automaton: AhoCorasick,
    /// Pattern index → indices into `categories`. A keyword listed in several
    /// categories is one pattern hitting all of them.
    pattern_categories: Vec<Vec<usize>>,
}

impl KeywordTaxonomy {
    pub fn from_definition(definition: &TaxonomyDefinition) -> Result<Self, LibraryError> {
        if definition.categories.is_empty() {
            return Err(LibraryError::EmptyTaxonomy);
        }

        let mut categories = Vec::with_capacity(definition.categories.len());
        let mut keyword_index: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();

        for (idx, cat) in definition.categories.iter().enumerate() {
            let name = cat.name.trim();
            if name.is_empty() {
                return Err(LibraryError::BlankCategoryName);
            }
            if categories.iter().any(|c: &String| c == name) {
                return Err(LibraryError::DuplicateCategory {
                    category: name.to_string(),
                });
            }
            if cat.keywords.is_empty() {
                return Err(LibraryError::EmptyKeywordCategory {
                    category: name.to_string(),
                });
            }
            for keyword in &cat.keywords {
                let normalized = keyword.trim().to_ascii_lowercase();
                if normalized.is_empty() {
                    return Err(LibraryError::BlankPattern {
                        category: name.to_string(),
                    });
                }
                keyword_index.entry(normalized).or_default().insert(idx);
            }
            categories.push(name.to_string());
        }

        let (patterns, pattern_categories): (Vec<String>, Vec<Vec<usize>>) = keyword_index
            .into_iter()
            .map(|(keyword, cats)| (keyword, cats.into_iter().collect()))
            .unzip();

        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| LibraryError::AutomatonBuild {
                message: e.to_string(),
            })?;

        tracing::debug!(
            categories = categories.len(),
            keywords = patterns.len(),
            "keyword taxonomy compiled"
        );

        Ok(Self {
            categories,
            automaton,
            pattern_categories,
        })
    }

    /// The built-in taxonomy.
    pub fn builtin() -> Result<Self, LibraryError> {
        Self::from_definition(&default_taxonomy_definition())
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Keyword hits per category. Every category is a key.
    pub fn hits(&self, text: &str) -> BTreeMap<String, u32> {
        let mut counts = vec![0u32; self.categories.len()];
        let bytes = text.as_bytes();

        for m in self.automaton.find_iter(text) {
            let before_ok = m.start() == 0 || !is_word_byte(bytes[m.start() - 1]);
            let after_ok = m.end() == bytes.len() || !is_word_byte(bytes[m.end()]);
            if before_ok && after_ok {
                for &cat in &self.pattern_categories[m.pattern().as_usize()] {
                    counts[cat] = counts[cat].saturating_add(1);
                }
            }
        }

        self.categories.iter().cloned().zip(counts).collect()
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Built-in keyword categories: action, technical and business vocabulary,
/// plus the tone marker sets used by the tone score.
pub fn default_taxonomy_definition() -> TaxonomyDefinition {
    let cat = |name: &str, keywords: &[&str]| KeywordCategoryDefinition {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    };

    TaxonomyDefinition {
        categories: vec![
            cat(
                "action",
                &[
                    "analyze", "classify", "compare", "create", "describe", "evaluate", "explain",
                    "extract", "generate", "identify", "list", "provide", "review", "summarize",
                    "translate", "write",
                ],
            ),
            cat(
                "technical",
                &[
                    "algorithm", "api", "code", "database", "endpoint", "function", "http",
                    "integration", "json", "model", "parameter", "query", "regex", "schema", "sql",
                    "token", "xml", "yaml",
                ],
            ),
            cat(
                "business",
                &[
                    "budget", "client", "customer", "kpi", "market", "marketing", "product",
                    "revenue", "roi", "sales", "stakeholder", "strategy",
                ],
            ),
            cat(
                "politeness",
                &["please", "thank you", "thanks", "kindly", "appreciate", "would you"],
            ),
            cat(
                "directive",
                &["must", "should", "ensure", "always", "never", "do not", "make sure", "required"],
            ),
            cat(
                "informal",
                &["hey", "gonna", "wanna", "kinda", "cool", "awesome", "stuff", "yeah", "lol"],
            ),
            cat(
                "formal",
                &[
                    "therefore", "furthermore", "moreover", "hereby", "pursuant", "accordingly",
                    "consequently", "shall",
                ],
            ),
        ],
    }
}
