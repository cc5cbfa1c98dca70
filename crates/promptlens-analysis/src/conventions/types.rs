//! Convention profile types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Variable placeholder syntaxes, in precedence order.
///
/// A span claimed by an earlier kind is never attributed to a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableSyntax {
    /// `{{name}}`
    DoubleBrace,
    /// `@name`
    AtSymbol,
    /// `` `name` `` or ```` ```{name}``` ````
    Backtick,
}

impl VariableSyntax {
    /// All kinds in precedence order.
    pub const ALL: [VariableSyntax; 3] = [Self::DoubleBrace, Self::AtSymbol, Self::Backtick];

    pub fn name(&self) -> &'static str {
        match self {
            Self::DoubleBrace => "double_brace",
            Self::AtSymbol => "at_symbol",
            Self::Backtick => "backtick",
        }
    }
}

impl fmt::Display for VariableSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier naming styles, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    SnakeCase,
    CamelCase,
    PascalCase,
    Other,
}

impl NamingStyle {
    pub const ALL: [NamingStyle; 4] = [
        Self::SnakeCase,
        Self::CamelCase,
        Self::PascalCase,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SnakeCase => "snake_case",
            Self::CamelCase => "camel_case",
            Self::PascalCase => "pascal_case",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header counters. Kept separate on purpose: a header repeated inside one
/// prompt raises `occurrences` but not `prompts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderCount {
    /// Total header lines across all folded prompts.
    pub occurrences: u32,
    /// Prompts containing the header at least once.
    pub prompts: u32,
}

/// Frequency tables of discovered conventions for one prompt or a corpus.
///
/// `ConventionProfile::default()` (zero prompts, empty tables) is the
/// aggregation identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConventionProfile {
    /// Number of prompts folded into this profile.
    pub prompts: u32,
    /// Tag name → occurrences. `@` tags keep their `@` prefix.
    pub tags: BTreeMap<String, u32>,
    /// Syntax kind → raw token → count.
    pub variables: BTreeMap<VariableSyntax, BTreeMap<String, u32>>,
    /// Normalized header key → counters.
    pub headers: BTreeMap<String, HeaderCount>,
    /// Naming style → identifiers classified.
    pub naming: BTreeMap<NamingStyle, u32>,
}

impl ConventionProfile {
    /// Total variable tokens of one syntax kind.
    pub fn variable_total(&self, syntax: VariableSyntax) -> u32 {
        self.variables
            .get(&syntax)
            .map(|tokens| tokens.values().sum())
            .unwrap_or(0)
    }

    /// Occurrences of an angle-bracket or `@` tag.
    pub fn tag_count(&self, name: &str) -> u32 {
        self.tags.get(name).copied().unwrap_or(0)
    }

    /// Returns true if any `<Name>` style tag was found.
    pub fn has_angle_tags(&self) -> bool {
        self.tags.keys().any(|k| !k.starts_with('@'))
    }

    pub fn header(&self, key: &str) -> HeaderCount {
        self.headers.get(key).copied().unwrap_or_default()
    }

    pub fn naming_count(&self, style: NamingStyle) -> u32 {
        self.naming.get(&style).copied().unwrap_or(0)
    }

    /// Returns true if nothing was discovered (prompt count aside).
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.variables.is_empty()
            && self.headers.is_empty()
            && self.naming.is_empty()
    }
}
