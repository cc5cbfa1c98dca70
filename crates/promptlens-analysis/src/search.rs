//! Literal or regex search across prompt texts.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use promptlens_core::errors::InputError;
use promptlens_core::types::SmallVec5;

use crate::corpus::PromptInput;

/// Characters of context kept on each side of a hit.
const CONTEXT_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring.
    Literal,
    /// Case-insensitive regex.
    Regex,
}

/// Prompts with at least one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub hits: usize,
    /// Up to five hits with surrounding context, in text order.
    pub excerpts: SmallVec5<String>,
}

/// Search inputs for `query`. Inputs without text are skipped.
pub fn search_prompts(
    inputs: &[PromptInput],
    query: &str,
    mode: SearchMode,
) -> Result<Vec<SearchHit>, InputError> {
    if query.trim().is_empty() {
        return Err(InputError::InvalidQuery {
            query: query.to_string(),
            message: "query must not be blank".to_string(),
        });
    }

    let source = match mode {
        SearchMode::Literal => regex::escape(query),
        SearchMode::Regex => query.to_string(),
    };
    let re = RegexBuilder::new(&source)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| InputError::InvalidQuery {
            query: query.to_string(),
            message: e.to_string(),
        })?;

    let mut results = Vec::new();
    for input in inputs {
        let Some(text) = input.text.as_deref() else {
            continue;
        };
        let mut hits = 0usize;
        let mut excerpts = SmallVec5::new();
        for m in re.find_iter(text).filter(|m| !m.is_empty()) {
            hits += 1;
            if excerpts.len() < excerpts.inline_size() {
                excerpts.push(context(text, m.start(), m.end()));
            }
        }
        if hits > 0 {
            results.push(SearchHit {
                id: input.id.clone(),
                hits,
                excerpts,
            });
        }
    }
    Ok(results)
}

fn context(text: &str, start: usize, end: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    text[from..to].split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Vec<PromptInput> {
        vec![
            PromptInput::new("a", "Return JSON. Always return json."),
            PromptInput::new("b", "Write a poem."),
            PromptInput {
                id: "c".to_string(),
                text: None,
                metadata: Default::default(),
            },
        ]
    }

    #[test]
    fn test_literal_search() {
        let hits = search_prompts(&inputs(), "json", SearchMode::Literal).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[0].hits, 2);
        assert_eq!(hits[0].excerpts.len(), 2);
    }

    #[test]
    fn test_regex_search_and_errors() {
        let hits = search_prompts(&inputs(), r"\bpo\w+", SearchMode::Regex).unwrap();
        assert_eq!(hits[0].id, "b");

        let err = search_prompts(&inputs(), "(", SearchMode::Regex).unwrap_err();
        assert!(matches!(err, InputError::InvalidQuery { .. }));
        assert!(search_prompts(&inputs(), "(", SearchMode::Literal).unwrap().is_empty());
        assert!(search_prompts(&inputs(), " ", SearchMode::Literal).is_err());
    }

    #[test]
    fn test_context_window_is_char_safe() {
        let text = "é".repeat(40) + "needle" + &"ü".repeat(40);
        let start = text.find("needle").unwrap();
        let excerpt = context(&text, start, start + 6);
        assert_eq!(excerpt.chars().count(), 66);
    }
}
