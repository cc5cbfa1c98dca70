//! Tag discovery: `<Name>…</Name>`, Beam `<Name>…<EndName>`, and `@name` tokens.

use std::sync::LazyLock;

use regex::Regex;

use promptlens_core::types::FxHashSet;

/// Any angle-bracket marker: `<Name>`, `</Name>`, `< Name >`.
static ANGLE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/?)\s*([A-Za-z][A-Za-z0-9_-]*)\s*>").expect("valid regex")
});

/// `@name` candidate; the preceding character is checked separately.
static AT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z][A-Za-z0-9_]*)").expect("valid regex")
});

/// An `@name` token not preceded by a word character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtToken<'t> {
    pub start: usize,
    pub end: usize,
    /// The name without the `@`.
    pub name: &'t str,
}

/// `@name` tokens in text order. E-mail addresses (`user@host`) are skipped
/// because the `@` follows a word character.
pub fn at_tokens(text: &str) -> impl Iterator<Item = AtToken<'_>> + '_ {
    AT_TOKEN.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        let preceded_by_word = text[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if preceded_by_word {
            None
        } else {
            Some(AtToken {
                start: whole.start(),
                end: whole.end(),
                name: name.as_str(),
            })
        }
    })
}

/// Names of closed angle-bracket tag pairs, one entry per pair, in the order
/// the pairs close.
///
/// `</Name>` closes an open `<Name>`. `<EndName>` closes an open `<Name>`;
/// otherwise it is an ordinary opening marker. A name is either open or not:
/// a repeated `<Name>` inside an open pair is part of that pair, and openers
/// never closed are dropped. Single pass over the markers.
pub fn angle_tags(text: &str) -> Vec<&str> {
    let mut open: FxHashSet<&str> = FxHashSet::default();
    let mut found = Vec::new();

    for caps in ANGLE_MARKER.captures_iter(text) {
        let Some(name) = caps.get(2).map(|m| m.as_str()) else {
            continue;
        };
        let closing = caps.get(1).is_some_and(|m| !m.is_empty());

        if closing {
            if open.remove(name) {
                found.push(name);
            }
            continue;
        }
        if let Some(base) = strip_end_prefix(name) {
            if open.remove(base) {
                found.push(base);
                continue;
            }
        }
        open.insert(name);
    }
    found
}

/// `EndTopic` → `Topic`, `endTopic` → `Topic`.
fn strip_end_prefix(name: &str) -> Option<&str> {
    let prefix = name.get(..3)?;
    if prefix.eq_ignore_ascii_case("end") && name.len() > 3 {
        name.get(3..)
    } else {
        None
    }
}
