//! Variable placeholder discovery with span claiming.
//!
//! Kinds are scanned in [`VariableSyntax::ALL`] order. A match that overlaps
//! a span already claimed by an earlier kind is dropped, so every raw token
//! lands in exactly one bucket.

use std::sync::LazyLock;

use regex::Regex;

use super::tags::at_tokens;
use super::types::VariableSyntax;

static DOUBLE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid regex"));

static TRIPLE_TICK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\{([^}`]+)\}```").expect("valid regex"));

static SINGLE_TICK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([A-Za-z_][A-Za-z0-9_.-]*)`").expect("valid regex"));

/// A classified variable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableToken<'t> {
    pub syntax: VariableSyntax,
    /// The raw token as written, e.g. `{{user_name}}`.
    pub raw: &'t str,
    /// The identifier inside the token, trimmed.
    pub identifier: &'t str,
    pub start: usize,
    pub end: usize,
}

/// Discover variable tokens, ordered by position.
pub fn discover_variables(text: &str) -> Vec<VariableToken<'_>> {
    let mut claimed: Vec<VariableToken<'_>> = Vec::new();

    for syntax in VariableSyntax::ALL {
        for candidate in candidates(text, syntax) {
            if !candidate.identifier.is_empty() {
                claim(&mut claimed, candidate);
            }
        }
    }
    claimed
}

/// Insert `token` into `claimed` (sorted by start, non-overlapping) unless it
/// overlaps a span already there. Returns whether it was inserted.
fn claim<'t>(claimed: &mut Vec<VariableToken<'t>>, token: VariableToken<'t>) -> bool {
    // Spans are disjoint, so ends are sorted too.
    let idx = claimed.partition_point(|t| t.end <= token.start);
    if claimed.get(idx).is_some_and(|t| t.start < token.end) {
        return false;
    }
    claimed.insert(idx, token);
    true
}

fn candidates(text: &str, syntax: VariableSyntax) -> Vec<VariableToken<'_>> {
    match syntax {
        VariableSyntax::DoubleBrace => captured(text, &DOUBLE_BRACE, syntax),
        VariableSyntax::AtSymbol => at_tokens(text)
            .map(|t| VariableToken {
                syntax,
                raw: &text[t.start..t.end],
                identifier: t.name,
                start: t.start,
                end: t.end,
            })
            .collect(),
        VariableSyntax::Backtick => {
            // Fenced form first so its inner backticks are never re-read.
            let mut found = captured(text, &TRIPLE_TICK, syntax);
            for token in captured(text, &SINGLE_TICK, syntax) {
                claim(&mut found, token);
            }
            found
        }
    }
}

fn captured<'t>(text: &'t str, re: &Regex, syntax: VariableSyntax) -> Vec<VariableToken<'t>> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(VariableToken {
                syntax,
                raw: whole.as_str(),
                identifier: inner.as_str().trim(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(VariableSyntax, &str)> {
        discover_variables(text)
            .into_iter()
            .map(|t| (t.syntax, t.raw))
            .collect()
    }

    #[test]
    fn test_each_kind() {
        let found = kinds("Hi {{name}}, see @topic and `user_id` or ```{order}```.");
        assert_eq!(
            found,
            vec![
                (VariableSyntax::DoubleBrace, "{{name}}"),
                (VariableSyntax::AtSymbol, "@topic"),
                (VariableSyntax::Backtick, "`user_id`"),
                (VariableSyntax::Backtick, "```{order}```"),
            ]
        );
    }

    #[test]
    fn test_double_brace_claims_inner_at() {
        let found = kinds("{{@user}}");
        assert_eq!(found, vec![(VariableSyntax::DoubleBrace, "{{@user}}")]);
    }

    #[test]
    fn test_at_claims_before_backtick() {
        // `@name` is not an identifier for the backtick rule, and the @ token wins.
        let found = kinds("`@name`");
        assert_eq!(found, vec![(VariableSyntax::AtSymbol, "@name")]);
    }

    #[test]
    fn test_identifier_trimmed() {
        let tokens = discover_variables("{{  customer_name }}");
        assert_eq!(tokens[0].identifier, "customer_name");
    }

    #[test]
    fn test_claim_rejects_overlap() {
        let token = |start, end| VariableToken {
            syntax: VariableSyntax::DoubleBrace,
            raw: "",
            identifier: "x",
            start,
            end,
        };
        let mut claimed = Vec::new();
        assert!(claim(&mut claimed, token(10, 20)));
        assert!(claim(&mut claimed, token(0, 5)));
        assert!(claim(&mut claimed, token(20, 25)));
        assert!(!claim(&mut claimed, token(4, 11)));
        assert!(!claim(&mut claimed, token(12, 14)));
        let starts: Vec<usize> = claimed.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 10, 20]);
    }

    #[test]
    fn test_blank_braces_ignored() {
        assert!(discover_variables("{{   }}").is_empty());
    }
}
