//! Section header detection.

use promptlens_core::constants::DEFAULT_HEADER_KEYWORDS;

/// Recognizes section header lines and normalizes them to bucket keys.
///
/// A header is either a markdown heading (`#` to `######` followed by
/// whitespace and text) or a line that starts with a known keyword
/// immediately followed by `:`. Keys are case-folded and trimmed.
#[derive(Debug, Clone)]
pub struct HeaderScanner {
    /// Lowercased keywords, longest first so `output format` wins over `output`.
    keywords: Vec<String>,
}

impl Default for HeaderScanner {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_KEYWORDS.iter().copied())
    }
}

impl HeaderScanner {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keywords.dedup();
        Self { keywords }
    }

    /// Normalized header keys in line order, duplicates included.
    pub fn scan<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.lines().filter_map(|line| self.header_key(line))
    }

    /// Number of header lines in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.scan(text).count()
    }

    /// The normalized key if `line` is a header.
    pub fn header_key(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.starts_with('#') {
            return markdown_heading(line);
        }

        let lower = line.to_lowercase();
        self.keywords
            .iter()
            .find(|kw| {
                lower
                    .strip_prefix(kw.as_str())
                    .is_some_and(|rest| rest.starts_with(':'))
            })
            .cloned()
    }
}

fn markdown_heading(line: &str) -> Option<String> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim().trim_end_matches('#').trim().trim_end_matches(':').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_headers() {
        let scanner = HeaderScanner::default();
        assert_eq!(scanner.header_key("Role: analyst"), Some("role".to_string()));
        assert_eq!(
            scanner.header_key("  OUTPUT FORMAT: json"),
            Some("output format".to_string())
        );
        assert_eq!(scanner.header_key("Role : analyst"), None);
        assert_eq!(scanner.header_key("The role: analyst"), None);
    }

    #[test]
    fn test_markdown_headings() {
        let scanner = HeaderScanner::default();
        assert_eq!(scanner.header_key("## Output Format ##"), Some("output format".to_string()));
        assert_eq!(scanner.header_key("#hashtag"), None);
        assert_eq!(scanner.header_key("####### too deep"), None);
        assert_eq!(scanner.header_key("# "), None);
    }

    #[test]
    fn test_custom_keywords() {
        let scanner = HeaderScanner::new(["Persona", "persona"]);
        assert_eq!(scanner.header_key("persona: x"), Some("persona".to_string()));
        assert_eq!(scanner.header_key("Role: x"), None);
    }

    #[test]
    fn test_duplicates_counted() {
        let scanner = HeaderScanner::default();
        assert_eq!(scanner.count("Task: a\nTask: b\n# Notes"), 3);
    }
}
