//! Per-prompt convention discovery.

use super::headers::HeaderScanner;
use super::naming::classify_identifier;
use super::tags::{angle_tags, at_tokens};
use super::types::{ConventionProfile, HeaderCount};
use super::variables::discover_variables;

/// Discover conventions with the default header keywords.
pub fn discover(text: &str) -> ConventionProfile {
    ConventionDiscoverer::default().discover(text)
}

/// Convention discovery with a configurable header keyword list.
#[derive(Debug, Clone, Default)]
pub struct ConventionDiscoverer {
    headers: HeaderScanner,
}

impl ConventionDiscoverer {
    pub fn new(headers: HeaderScanner) -> Self {
        Self { headers }
    }

    pub fn header_scanner(&self) -> &HeaderScanner {
        &self.headers
    }

    /// Build the profile of a single prompt (`prompts == 1`).
    ///
    /// Naming styles are tallied over variable identifiers and angle-bracket
    /// tag names. `@` tags are counted as tags and as variables, but their
    /// identifier is classified once.
    pub fn discover(&self, text: &str) -> ConventionProfile {
        let mut profile = ConventionProfile {
            prompts: 1,
            ..Default::default()
        };

        for name in angle_tags(text) {
            *profile.tags.entry(name.to_string()).or_default() += 1;
            *profile.naming.entry(classify_identifier(name)).or_default() += 1;
        }
        for token in at_tokens(text) {
            *profile.tags.entry(format!("@{}", token.name)).or_default() += 1;
        }

        for token in discover_variables(text) {
            *profile
                .variables
                .entry(token.syntax)
                .or_default()
                .entry(token.raw.to_string())
                .or_default() += 1;
            *profile
                .naming
                .entry(classify_identifier(token.identifier))
                .or_default() += 1;
        }

        for key in self.headers.scan(text) {
            let entry = profile.headers.entry(key).or_insert(HeaderCount::default());
            entry.occurrences += 1;
            entry.prompts = 1;
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::types::{NamingStyle, VariableSyntax};

    #[test]
    fn test_empty_text() {
        let profile = discover("");
        assert_eq!(profile.prompts, 1);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_full_profile() {
        let text = "Role: analyst\n<Context>{{customer_name}}</Context>\nUse @ticketId.\nRole: again";
        let profile = discover(text);

        assert_eq!(profile.tag_count("Context"), 1);
        assert_eq!(profile.tag_count("@ticketId"), 1);
        assert_eq!(profile.variable_total(VariableSyntax::DoubleBrace), 1);
        assert_eq!(profile.variable_total(VariableSyntax::AtSymbol), 1);
        assert_eq!(profile.header("role").occurrences, 2);
        assert_eq!(profile.header("role").prompts, 1);
        // Context → Pascal, customer_name → snake, ticketId → camel
        assert_eq!(profile.naming_count(NamingStyle::PascalCase), 1);
        assert_eq!(profile.naming_count(NamingStyle::SnakeCase), 1);
        assert_eq!(profile.naming_count(NamingStyle::CamelCase), 1);
    }
}
