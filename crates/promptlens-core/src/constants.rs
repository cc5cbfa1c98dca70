//! Shared constants for the PromptLens analysis engine.

/// PromptLens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "promptlens.toml";

/// Default maximum excerpts kept per category in a detection record.
pub const DEFAULT_EXCERPT_LIMIT: usize = 5;

/// Default maximum characters per excerpt.
pub const DEFAULT_EXCERPT_MAX_CHARS: usize = 80;

/// Default tone standard deviation below which a corpus counts as tone-consistent.
pub const DEFAULT_TONE_CONSISTENCY_THRESHOLD: f64 = 1.5;

/// Default decimal places for reported usage percentages.
pub const DEFAULT_PERCENTAGE_PRECISION: u32 = 1;

/// Upper bound for the 0-10 score dimensions.
pub const MAX_SCORE: f64 = 10.0;

/// Upper bound for the readability dimension.
pub const MAX_READABILITY: f64 = 100.0;

/// Section header keywords recognized when immediately followed by a colon.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &[
    "role",
    "instructions",
    "instruction",
    "task",
    "objective",
    "rules",
    "general rules",
    "constraints",
    "context",
    "background",
    "variables",
    "parameters",
    "input",
    "output",
    "output format",
    "format",
    "examples",
    "example",
    "guidelines",
    "notes",
];
