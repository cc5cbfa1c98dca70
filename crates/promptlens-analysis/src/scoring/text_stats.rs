//! Surface text statistics: words, sentences, syllables.

use serde::{Deserialize, Serialize};

/// Raw statistics the scores are derived from. All zero for text without words.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: u32,
    pub sentence_count: u32,
    /// Characters per word.
    pub avg_word_length: f64,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let words = words(text);
        if words.is_empty() {
            return Self::default();
        }

        let word_count = words.len();
        // Words without any terminator-delimited sentence still form one sentence.
        let sentence_count = sentence_count(text).max(1);
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let syllables: u32 = words.iter().map(|w| count_syllables(w)).sum();

        Self {
            word_count: to_u32(word_count),
            sentence_count: to_u32(sentence_count),
            avg_word_length: chars as f64 / word_count as f64,
            avg_sentence_length: word_count as f64 / sentence_count as f64,
            avg_syllables_per_word: f64::from(syllables) / word_count as f64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Whitespace-split words with surrounding ASCII punctuation stripped.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Sentences split on runs of `.`, `!`, `?`. Segments without an alphanumeric
/// character are not sentences.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Approximate syllables by counting vowel groups. A trailing silent `e` is
/// dropped when the word has another vowel group; every word has at least one.
pub fn count_syllables(word: &str) -> u32 {
    let lower: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0u32;
    let mut previous_vowel = false;
    for &c in &lower {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let silent_e = lower.len() > 2
        && lower.last() == Some(&'e')
        && !is_vowel(lower[lower.len() - 2])
        && !(lower[lower.len() - 2] == 'l' && !is_vowel(lower[lower.len() - 3]));
    if silent_e && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}
