//! Detection over a compiled pattern library.

use std::collections::{BTreeMap, BTreeSet};

use promptlens_core::types::SmallVec5;

use super::types::{DetectionRecord, ExcerptLimits};
use crate::library::PatternLibrary;

/// Detect library patterns in `text` with the default excerpt limits.
pub fn detect(prompt_id: &str, text: &str, library: &PatternLibrary) -> DetectionRecord {
    detect_with_limits(prompt_id, text, library, ExcerptLimits::default())
}

/// Detect library patterns in `text`.
///
/// Each rule contributes its non-overlapping matches; matches of different
/// rules in one category are all counted even when they overlap.
pub fn detect_with_limits(
    prompt_id: &str,
    text: &str,
    library: &PatternLibrary,
    limits: ExcerptLimits,
) -> DetectionRecord {
    let mut counts = BTreeMap::new();
    let mut excerpts = BTreeMap::new();
    let mut matched = BTreeSet::new();

    for category in library.categories() {
        let mut count = 0u32;
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for rule in category.rules() {
            for span in rule.find_spans(text) {
                count = count.saturating_add(1);
                spans.push(span);
            }
        }

        // Stable sort keeps rule order for matches starting at the same byte.
        spans.sort_by_key(|&(start, _)| start);
        let kept: SmallVec5<String> = spans
            .iter()
            .take(limits.max_excerpts)
            .map(|&(start, end)| excerpt(&text[start..end], limits.max_chars))
            .collect();

        let name = category.name().to_string();
        if count > 0 {
            matched.insert(name.clone());
        }
        counts.insert(name.clone(), count);
        excerpts.insert(name, kept);
    }

    DetectionRecord {
        prompt_id: prompt_id.to_string(),
        counts,
        excerpts,
        matched,
    }
}

/// Collapse whitespace runs and cut to `max_chars` characters.
fn excerpt(matched: &str, max_chars: usize) -> String {
    let collapsed = matched.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(max_chars) {
        Some((cut, _)) => collapsed[..cut].to_string(),
        None => collapsed,
    }
}
