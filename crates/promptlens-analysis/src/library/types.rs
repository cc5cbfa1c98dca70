//! Compiled pattern library types.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use promptlens_core::errors::LibraryError;

use super::definition::{LibraryDefinition, RuleDefinition};

/// Category names that would collide with fixed export keys
/// (`detection.matched`).
pub const RESERVED_CATEGORY_NAMES: &[&str] = &["matched"];

/// How a rule's expression is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Substring match of the phrase.
    Literal,
    /// Regex search. `^`/`$` anchor at line boundaries and `.` matches newlines.
    Regex,
}

/// A single compiled matching rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    category: String,
    expression: String,
    kind: RuleKind,
    case_sensitive: bool,
    compiled: Regex,
}

impl PatternRule {
    /// Compile a rule for `category`. Literal phrases are escaped so they match
    /// verbatim through the same engine as regex rules.
    pub fn compile(category: &str, def: &RuleDefinition) -> Result<Self, LibraryError> {
        if def.pattern.trim().is_empty() {
            return Err(LibraryError::BlankPattern {
                category: category.to_string(),
            });
        }

        let (kind, source) = if def.regex {
            (RuleKind::Regex, def.pattern.clone())
        } else {
            (RuleKind::Literal, regex::escape(&def.pattern))
        };

        let compiled = RegexBuilder::new(&source)
            .case_insensitive(!def.case_sensitive)
            .multi_line(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| LibraryError::InvalidRegex {
                category: category.to_string(),
                pattern: def.pattern.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            category: category.to_string(),
            expression: def.pattern.clone(),
            kind,
            case_sensitive: def.case_sensitive,
            compiled,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The expression as written in the definition (unescaped for literals).
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Non-overlapping, non-empty match spans in text order.
    pub fn find_spans<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.compiled
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
    }
}

/// A category and its rules, in definition order.
#[derive(Debug, Clone)]
pub struct PatternCategory {
    name: String,
    description: Option<String>,
    rules: Vec<PatternRule>,
}

impl PatternCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

/// Immutable registry of pattern categories.
///
/// Never empty: construction fails unless there is at least one category and
/// every category has at least one rule.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    categories: Vec<PatternCategory>,
}

impl PatternLibrary {
    /// Compile and validate a definition.
    pub fn from_definition(definition: &LibraryDefinition) -> Result<Self, LibraryError> {
        if definition.categories.is_empty() {
            return Err(LibraryError::EmptyLibrary);
        }

        let mut seen = BTreeSet::new();
        let mut categories = Vec::with_capacity(definition.categories.len());

        for cat in &definition.categories {
            let name = cat.name.trim();
            if name.is_empty() {
                return Err(LibraryError::BlankCategoryName);
            }
            if RESERVED_CATEGORY_NAMES.contains(&name) {
                return Err(LibraryError::ReservedCategoryName {
                    category: name.to_string(),
                });
            }
            if !seen.insert(name.to_string()) {
                return Err(LibraryError::DuplicateCategory {
                    category: name.to_string(),
                });
            }
            if cat.rules.is_empty() {
                return Err(LibraryError::EmptyCategory {
                    category: name.to_string(),
                });
            }

            let rules = cat
                .rules
                .iter()
                .map(|rule| PatternRule::compile(name, rule))
                .collect::<Result<Vec<_>, _>>()?;

            categories.push(PatternCategory {
                name: name.to_string(),
                description: cat.description.clone(),
                rules,
            });
        }

        tracing::debug!(
            categories = categories.len(),
            rules = categories.iter().map(|c| c.rules.len()).sum::<usize>(),
            "pattern library compiled"
        );

        Ok(Self { categories })
    }

    /// The built-in library.
    pub fn builtin() -> Result<Self, LibraryError> {
        Self::from_definition(&super::defaults::default_library_definition())
    }

    pub fn categories(&self) -> &[PatternCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&PatternCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in definition order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::definition::CategoryDefinition;

    fn category(name: &str, rules: Vec<RuleDefinition>) -> CategoryDefinition {
        CategoryDefinition {
            name: name.to_string(),
            description: None,
            rules,
        }
    }

    #[test]
    fn test_literal_is_escaped() {
        let rule = PatternRule::compile("c", &RuleDefinition::literal("a.b")).unwrap();
        assert_eq!(rule.find_spans("axb").count(), 0);
        assert_eq!(rule.find_spans("A.B and a.b").count(), 2);
    }

    #[test]
    fn test_case_sensitive_rule() {
        let def = RuleDefinition {
            pattern: "ROLE:".to_string(),
            regex: false,
            case_sensitive: true,
        };
        let rule = PatternRule::compile("role", &def).unwrap();
        assert_eq!(rule.find_spans("role: x\nROLE: y").count(), 1);
    }

    #[test]
    fn test_regex_multiline_anchor() {
        let rule = PatternRule::compile("h", &RuleDefinition::regex(r"^\s*task\s*:")).unwrap();
        assert_eq!(rule.find_spans("intro\nTask: do it\n  task : again").count(), 2);
    }

    #[test]
    fn test_empty_matches_skipped() {
        let rule = PatternRule::compile("e", &RuleDefinition::regex("x*")).unwrap();
        assert_eq!(rule.find_spans("abc").count(), 0);
        assert_eq!(rule.find_spans("axxb").count(), 1);
    }

    #[test]
    fn test_validation_errors() {
        let empty = LibraryDefinition::default();
        assert!(matches!(
            PatternLibrary::from_definition(&empty),
            Err(LibraryError::EmptyLibrary)
        ));

        let dup = LibraryDefinition {
            categories: vec![
                category("a", vec![RuleDefinition::literal("x")]),
                category(" a ", vec![RuleDefinition::literal("y")]),
            ],
        };
        assert!(matches!(
            PatternLibrary::from_definition(&dup),
            Err(LibraryError::DuplicateCategory { .. })
        ));

        let no_rules = LibraryDefinition {
            categories: vec![category("a", vec![])],
        };
        assert!(matches!(
            PatternLibrary::from_definition(&no_rules),
            Err(LibraryError::EmptyCategory { .. })
        ));

        let bad_regex = LibraryDefinition {
            categories: vec![category("a", vec![RuleDefinition::regex("(unclosed")])],
        };
        assert!(matches!(
            PatternLibrary::from_definition(&bad_regex),
            Err(LibraryError::InvalidRegex { .. })
        ));

        let blank = LibraryDefinition {
            categories: vec![category("a", vec![RuleDefinition::literal("  ")])],
        };
        assert!(matches!(
            PatternLibrary::from_definition(&blank),
            Err(LibraryError::BlankPattern { .. })
        ));

        let reserved = LibraryDefinition {
            categories: vec![category(" matched ", vec![RuleDefinition::literal("x")])],
        };
        assert!(matches!(
            PatternLibrary::from_definition(&reserved),
            Err(LibraryError::ReservedCategoryName { category }) if category == "matched"
        ));
    }
}
