//! Per-owner / project / workspace breakdowns.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::ScoreAccumulator;
use super::summary::{round_to, CorpusSummary};
use super::types::{PromptRecord, ScoreDimension};

/// Group key for prompts whose metadata field is unset.
pub const UNASSIGNED_GROUP: &str = "(unassigned)";

/// Metadata field to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Owner,
    Project,
    Workspace,
}

impl GroupBy {
    fn key<'r>(&self, record: &'r PromptRecord) -> Option<&'r str> {
        match self {
            Self::Owner => record.metadata.owner.as_deref(),
            Self::Project => record.metadata.project.as_deref(),
            Self::Workspace => record.metadata.workspace.as_deref(),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Owner => "owner",
            Self::Project => "project",
            Self::Workspace => "workspace",
        })
    }
}

/// Aggregates of one group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupStats {
    pub prompts: u64,
    /// Mean per score dimension.
    pub score_means: BTreeMap<ScoreDimension, f64>,
    pub compliance_mean: f64,
    /// Rounded usage percentage per category within the group.
    pub usage: BTreeMap<String, f64>,
}

#[derive(Default)]
struct GroupAccumulator {
    prompts: u64,
    scores: BTreeMap<ScoreDimension, ScoreAccumulator>,
    compliance: ScoreAccumulator,
    category_prompts: BTreeMap<String, u64>,
}

/// Group the corpus by a metadata field.
pub fn breakdown(summary: &CorpusSummary, group_by: GroupBy) -> BTreeMap<String, GroupStats> {
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();

    for record in summary.records() {
        let key = group_by.key(record).unwrap_or(UNASSIGNED_GROUP);
        let group = groups.entry(key.to_string()).or_default();
        group.prompts += 1;
        for dim in ScoreDimension::ALL {
            group
                .scores
                .entry(dim)
                .or_default()
                .push(dim.value(&record.scores));
        }
        group.compliance.push(record.compliance);
        for (category, &count) in &record.detection.counts {
            let entry = group.category_prompts.entry(category.clone()).or_default();
            if count > 0 {
                *entry += 1;
            }
        }
    }

    let precision = summary.percentage_precision();
    groups
        .into_iter()
        .map(|(key, group)| {
            let prompts = group.prompts;
            let stats = GroupStats {
                prompts,
                score_means: group
                    .scores
                    .iter()
                    .map(|(dim, acc)| (*dim, acc.mean()))
                    .collect(),
                compliance_mean: group.compliance.mean(),
                usage: group
                    .category_prompts
                    .into_iter()
                    .map(|(category, n)| {
                        let pct = n as f64 / prompts as f64 * 100.0;
                        (category, round_to(pct, precision))
                    })
                    .collect(),
            };
            (key, stats)
        })
        .collect()
}
