//! Preferred conventions of a profile, for template proposals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{ConventionProfile, NamingStyle, VariableSyntax};

/// Dominant section-tagging style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagStyle {
    Xml,
    Markdown,
    Mixed,
}

impl fmt::Display for TagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xml => "xml",
            Self::Markdown => "markdown",
            Self::Mixed => "mixed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredConventions {
    pub tag_style: TagStyle,
    /// Most used variable syntax; `None` when the profile has no variables.
    pub variable_syntax: Option<VariableSyntax>,
    /// Most used naming style; `None` when no identifier was classified.
    pub naming_style: Option<NamingStyle>,
}

/// Derive preferred conventions. Ties go to the earlier kind in precedence order.
pub fn preferred_conventions(profile: &ConventionProfile) -> PreferredConventions {
    let tag_style = if profile.has_angle_tags() {
        TagStyle::Xml
    } else if !profile.headers.is_empty() {
        TagStyle::Markdown
    } else {
        TagStyle::Mixed
    };

    PreferredConventions {
        tag_style,
        variable_syntax: most_frequent(VariableSyntax::ALL, |s| profile.variable_total(s)),
        naming_style: most_frequent(NamingStyle::ALL, |s| profile.naming_count(s)),
    }
}

fn most_frequent<T: Copy, const N: usize>(order: [T; N], count: impl Fn(T) -> u32) -> Option<T> {
    let mut best: Option<(T, u32)> = None;
    for item in order {
        let n = count(item);
        if n > 0 && best.map_or(true, |(_, top)| n > top) {
            best = Some((item, n));
        }
    }
    best.map(|(item, _)| item)
}
