//! The built-in pattern library.
//!
//! Every rule is case-insensitive. Header-style rules are anchored to line
//! starts, so `Task:` mid-sentence does not count as a section.

use super::definition::{CategoryDefinition, LibraryDefinition, RuleDefinition};

/// Category names of the built-in library, in definition order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "role_definition",
    "instructions",
    "examples",
    "constraints",
    "output_format",
    "variables",
    "anti_hallucination",
    "step_by_step",
    "context",
    "topic_blocks",
    "xml_blocks",
    "markdown",
];

fn category(name: &str, description: &str, rules: Vec<RuleDefinition>) -> CategoryDefinition {
    CategoryDefinition {
        name: name.to_string(),
        description: Some(description.to_string()),
        rules,
    }
}

/// Definition of the built-in library.
pub fn default_library_definition() -> LibraryDefinition {
    use RuleDefinition as R;

    LibraryDefinition {
        categories: vec![
            category(
                "role_definition",
                "Assigns the model a persona or role",
                vec![
                    R::regex(r"^\s*role\s*:"),
                    R::regex(r"\byou are\b"),
                    R::regex(r"\b(?:acting as|you act as|your role is|you will be|you serve as)\b"),
                ],
            ),
            category(
                "instructions",
                "Explicit task or instruction sections",
                vec![
                    R::regex(r"^\s*(?:instructions?|task|objective)\s*:"),
                    R::regex(r"\bfollow (?:these|the following|the) (?:steps|instructions|rules)\b"),
                ],
            ),
            category(
                "examples",
                "Worked examples or samples",
                vec![
                    R::regex(r"^\s*(?:examples?|sample)\s*:"),
                    R::regex(r"\bfor example\b"),
                    R::regex(r"<examples?>"),
                ],
            ),
            category(
                "constraints",
                "Rules and limitations on the response",
                vec![
                    R::regex(r"^\s*(?:general rules|rules?|constraints?|limitations?)\s*:"),
                    R::regex(r"\b(?:must not|do not|don't|never)\b"),
                ],
            ),
            category(
                "output_format",
                "Expected shape of the response",
                vec![
                    R::regex(r"^\s*(?:output format|response format|format)\s*:"),
                    R::regex(
                        r"\b(?:respond|reply|answer|return) (?:in|with|as) (?:json|xml|markdown|yaml|csv|a table|a list|bullet points)\b",
                    ),
                    R::regex(r"\bformat (?:the|your) (?:output|response|answer)\b"),
                ],
            ),
            category(
                "variables",
                "Placeholders filled in at run time",
                vec![
                    R::regex(r"\{\{[^{}]+\}\}"),
                    R::regex(r"```\{[^}]+\}```"),
                    R::regex(r"^\s*(?:variables?|parameters?|inputs?)\s*:"),
                ],
            ),
            category(
                "anti_hallucination",
                "Guards against invented content",
                vec![
                    R::regex(r"\b(?:do not|don't) (?:hallucinate|invent|make up|fabricate|make assumptions)\b"),
                    R::regex(r"\b(?:only use (?:the )?provided|stick to (?:the )?facts)\b"),
                    R::regex(r"\bif you (?:do not|don't) know\b"),
                    R::literal("be precise"),
                ],
            ),
            category(
                "step_by_step",
                "Sequenced reasoning or procedures",
                vec![
                    R::regex(r"\bstep[- ]by[- ]step\b"),
                    R::regex(r"\bstep \d+\b"),
                    R::regex(r"^\s*\d+[.)]\s+\S"),
                ],
            ),
            category(
                "context",
                "Background supplied to the model",
                vec![
                    R::literal("<context>"),
                    R::regex(r"^\s*(?:context|background)\s*:"),
                ],
            ),
            category(
                "topic_blocks",
                "Topic blocks closed by </Topic>, <EndTopic> or @endTopic",
                vec![
                    R::regex(r"<topic>.*?(?:</topic>|<end\s?topic>)"),
                    R::regex(r"@topic\b.*?@end\s?topic\b"),
                ],
            ),
            category(
                "xml_blocks",
                "Any paired angle-bracket block",
                vec![R::regex(
                    r"<[a-z][a-z0-9]*>.*?(?:</[a-z][a-z0-9]*>|<end[a-z0-9]*>)",
                )],
            ),
            category(
                "markdown",
                "Markdown headings, emphasis, lists and code",
                vec![
                    R::regex(r"^#{1,6}\s+\S"),
                    R::regex(r"\*\*[^*\n]+\*\*"),
                    R::regex(r"```.*?```"),
                    R::regex(r"^\s*[-*]\s+\S"),
                ],
            ),
        ],
    }
}
