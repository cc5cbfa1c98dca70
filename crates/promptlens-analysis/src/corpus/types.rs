//! Prompt input and record types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conventions::ConventionProfile;
use crate::detector::DetectionRecord;
use crate::scoring::ScoreRecord;

/// Metadata supplied by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptMetadata {
    pub owner: Option<String>,
    pub project: Option<String>,
    pub workspace: Option<String>,
    /// Free-form columns carried through untouched.
    pub attributes: BTreeMap<String, String>,
}

impl PromptMetadata {
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }
}

/// One prompt handed to a corpus call. `text` is `None` when the source row
/// had no text column value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptInput {
    pub id: String,
    pub text: Option<String>,
    #[serde(default)]
    pub metadata: PromptMetadata,
}

impl PromptInput {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            metadata: PromptMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: PromptMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Everything derived from one prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub metadata: PromptMetadata,
    pub detection: DetectionRecord,
    pub conventions: ConventionProfile,
    pub scores: ScoreRecord,
    /// Weighted compliance score in [0, 100].
    pub compliance: f64,
}

/// The score dimensions tracked at corpus level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Complexity,
    Clarity,
    Tone,
    Structure,
    Readability,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 5] = [
        Self::Complexity,
        Self::Clarity,
        Self::Tone,
        Self::Structure,
        Self::Readability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Complexity => "complexity",
            Self::Clarity => "clarity",
            Self::Tone => "tone",
            Self::Structure => "structure",
            Self::Readability => "readability",
        }
    }

    /// Read this dimension from a score record.
    pub fn value(&self, scores: &ScoreRecord) -> f64 {
        match self {
            Self::Complexity => scores.complexity,
            Self::Clarity => scores.clarity,
            Self::Tone => scores.tone,
            Self::Structure => scores.structure,
            Self::Readability => scores.readability,
        }
    }
}

impl fmt::Display for ScoreDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
