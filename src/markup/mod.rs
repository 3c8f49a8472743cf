//! Inline markup resolution.
//!
//! A paragraph of legal text is scanned against an ordered rule list;
//! matched substrings become bold or italic spans, everything else
//! stays plain. The output always covers the input with no gaps or
//! overlaps, so concatenating the span texts reproduces the paragraph
//! byte-for-byte.

mod rules;

pub use rules::contract_rules;

use regex::Regex;

use crate::model::{Span, SpanStyle};

/// How a rule locates its matches.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact literal phrase
    Phrase(String),
    /// Regular-expression pattern
    Pattern(Regex),
}

/// One styling rule: a matcher, the style to apply, and an optional
/// anchor phrase that must immediately precede the match.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    style: SpanStyle,
    anchor: Option<String>,
}

impl Rule {
    /// Rule matching an exact phrase.
    pub fn phrase(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            matcher: Matcher::Phrase(text.into()),
            style,
            anchor: None,
        }
    }

    /// Rule matching a regex pattern. Panics on an invalid pattern, so
    /// only use with literal patterns known at compile time.
    pub fn pattern(pattern: &str, style: SpanStyle) -> Self {
        Self {
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            style,
            anchor: None,
        }
    }

    /// Restrict the rule to matches immediately preceded by `anchor`.
    /// The same text elsewhere in the paragraph stays unstyled.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Byte ranges of all matches in `text`, honoring the anchor.
    fn find_matches(&self, text: &str) -> Vec<(usize, usize)> {
        let candidates: Vec<(usize, usize)> = match &self.matcher {
            Matcher::Phrase(phrase) => text
                .match_indices(phrase.as_str())
                .map(|(start, matched)| (start, start + matched.len()))
                .collect(),
            Matcher::Pattern(re) => re
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect(),
        };

        match &self.anchor {
            None => candidates,
            Some(anchor) => candidates
                .into_iter()
                .filter(|(start, _)| text[..*start].ends_with(anchor.as_str()))
                .collect(),
        }
    }
}

/// Resolves paragraphs into styled spans using an ordered rule list.
#[derive(Debug, Clone)]
pub struct MarkupResolver {
    rules: Vec<Rule>,
}

impl MarkupResolver {
    /// Create a resolver with a custom rule list. Earlier rules take
    /// precedence where matches overlap.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Resolver carrying the default contract rule set.
    pub fn contract() -> Self {
        Self::new(contract_rules())
    }

    /// A resolver with no rules; every paragraph becomes one plain span.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Split a paragraph into styled spans covering the entire input.
    ///
    /// With no matching rule the result is a single unstyled span equal
    /// to the input; text is never dropped or reordered.
    pub fn resolve(&self, paragraph: &str) -> Vec<Span> {
        let mut claimed: Vec<(usize, usize, SpanStyle)> = Vec::new();

        for rule in &self.rules {
            for (start, end) in rule.find_matches(paragraph) {
                if start == end {
                    continue;
                }
                let overlaps = claimed
                    .iter()
                    .any(|(s, e, _)| start < *e && end > *s);
                if !overlaps {
                    claimed.push((start, end, rule.style));
                }
            }
        }

        claimed.sort_by_key(|(start, _, _)| *start);

        let mut spans = Vec::with_capacity(claimed.len() * 2 + 1);
        let mut pos = 0;
        for (start, end, style) in claimed {
            if start > pos {
                spans.push(Span::plain(&paragraph[pos..start]));
            }
            spans.push(Span {
                text: paragraph[start..end].to_string(),
                style,
            });
            pos = end;
        }
        if pos < paragraph.len() || spans.is_empty() {
            spans.push(Span::plain(&paragraph[pos..]));
        }

        spans
    }
}

impl Default for MarkupResolver {
    fn default() -> Self {
        Self::contract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_no_markup_single_span() {
        let resolver = MarkupResolver::contract();
        let text = "Kedua belah pihak sepakat untuk bekerja sama.";
        let spans = resolver.resolve(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, text);
        assert!(!spans[0].style.has_styling());
    }

    #[test]
    fn test_roundtrip_property() {
        let resolver = MarkupResolver::contract();
        let texts = [
            "",
            "selanjutnya disebut PIHAK PERTAMA dalam perjanjian ini",
            "setoran sebesar Rp15.000.000,- (lima belas juta rupiah)",
            "paket ALPUKAT dengan skema bagi hasil",
            "keadaan force majeure membebaskan kedua pihak",
        ];
        for text in texts {
            let spans = resolver.resolve(text);
            assert_eq!(roundtrip(&spans), text, "round-trip failed for {:?}", text);
        }
    }

    #[test]
    fn test_anchor_conditioned_styling() {
        let resolver = MarkupResolver::contract();
        let text = "selanjutnya disebut PIHAK PERTAMA. Kewajiban PIHAK PERTAMA diatur di bawah.";
        let spans = resolver.resolve(text);

        let styled: Vec<&Span> = spans
            .iter()
            .filter(|s| s.text == "PIHAK PERTAMA" && s.style.bold)
            .collect();
        assert_eq!(styled.len(), 1, "only the anchored occurrence is bold");

        // The second, unanchored occurrence stays inside a plain span.
        let plain_tail = spans
            .iter()
            .filter(|s| !s.style.has_styling())
            .any(|s| s.text.contains("PIHAK PERTAMA"));
        assert!(plain_tail);
        assert_eq!(roundtrip(&spans), text);
    }

    #[test]
    fn test_currency_and_category_bold() {
        let resolver = MarkupResolver::contract();
        let spans =
            resolver.resolve("investasi ALPUKAT senilai Rp12.500.000,- dibayar penuh");
        assert!(spans
            .iter()
            .any(|s| s.text == "ALPUKAT" && s.style.bold));
        assert!(spans
            .iter()
            .any(|s| s.text == "Rp12.500.000,-" && s.style.bold));
    }

    #[test]
    fn test_italic_terms() {
        let resolver = MarkupResolver::contract();
        let spans = resolver.resolve("dalam hal terjadi force majeure");
        assert!(spans
            .iter()
            .any(|s| s.text == "force majeure" && s.style.italic));
    }

    #[test]
    fn test_earlier_rule_wins_overlap() {
        let rules = vec![
            Rule::phrase("alpha beta", SpanStyle::bold()),
            Rule::phrase("beta gamma", SpanStyle::italic()),
        ];
        let resolver = MarkupResolver::new(rules);
        let spans = resolver.resolve("alpha beta gamma");
        assert_eq!(spans[0].text, "alpha beta");
        assert!(spans[0].style.bold);
        assert_eq!(roundtrip(&spans), "alpha beta gamma");
    }

    #[test]
    fn test_empty_input() {
        let spans = MarkupResolver::contract().resolve("");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "");
    }
}
