//! Serializable pattern library definitions (TOML or JSON).
//!
//! ```toml
//! [[categories]]
//! name = "role_definition"
//! rules = [
//!     { pattern = "you are", regex = false },
//!     { pattern = '^\s*role\s*:', regex = true },
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use promptlens_core::errors::LibraryError;

/// One matching rule as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub pattern: String,
    /// Treat `pattern` as a regular expression. Default: literal phrase.
    #[serde(default)]
    pub regex: bool,
    /// Match case-sensitively. Default: case-insensitive.
    #[serde(default)]
    pub case_sensitive: bool,
}

impl RuleDefinition {
    pub fn literal(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            regex: false,
            case_sensitive: false,
        }
    }

    pub fn regex(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            regex: true,
            case_sensitive: false,
        }
    }
}

/// A named category and its ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// A full library definition: ordered categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryDefinition {
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
}

impl LibraryDefinition {
    pub fn from_toml_str(source: &str) -> Result<Self, LibraryError> {
        toml::from_str(source).map_err(|e| LibraryError::Unparseable {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json_str(source: &str) -> Result<Self, LibraryError> {
        serde_json::from_str(source).map_err(|e| LibraryError::Unparseable {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a definition file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, LibraryError> {
        read_definition(path)
    }
}

/// Read a TOML or JSON definition file, chosen by extension.
pub(crate) fn read_definition<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LibraryError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| LibraryError::Unreadable {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| LibraryError::Unparseable {
            path: display,
            message: e.to_string(),
        })
    } else {
        toml::from_str(&content).map_err(|e| LibraryError::Unparseable {
            path: display,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_definition_defaults_flags() {
        let def = LibraryDefinition::from_toml_str(
            r#"
[[categories]]
name = "greeting"
rules = [{ pattern = "hello" }, { pattern = "h[ae]y", regex = true, case_sensitive = true }]
"#,
        )
        .unwrap();
        assert_eq!(def.categories.len(), 1);
        let rules = &def.categories[0].rules;
        assert!(!rules[0].regex);
        assert!(!rules[0].case_sensitive);
        assert!(rules[1].regex);
        assert!(rules[1].case_sensitive);
    }

    #[test]
    fn test_json_definition() {
        let def = LibraryDefinition::from_json_str(
            r#"{"categories":[{"name":"greeting","rules":[{"pattern":"hello"}]}]}"#,
        )
        .unwrap();
        assert_eq!(def.categories[0].name, "greeting");
    }

    #[test]
    fn test_malformed_definition() {
        let err = LibraryDefinition::from_toml_str("[[categories]\nname = ").unwrap_err();
        assert!(matches!(err, LibraryError::Unparseable { .. }));
    }
}
