//! Keyword mention predicates and multi-keyword scanning
//!
//! Two deliberately different notions of "the CV already mentions this
//! keyword" coexist:
//!
//! - [`mentions_as_substring`]: case-insensitive substring anywhere in the
//!   raw text. Used by the suggestion engine; the rewrite engine applies the
//!   same test per section via [`KeywordScanner`].
//! - [`mentions_as_token`]: case-insensitive whole-token membership in the
//!   document's `\w+` token set. The analyzer builds the underlying
//!   [`TokenSet`] once per document and checks every keyword against it.
//!
//! The two can disagree (a keyword can appear as a raw substring yet not as
//! a token of a detected section and vice versa); that divergence is
//! documented behavior, not something to unify.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("valid word regex"))
}

/// Multi-keyword substring scanner built once per keyword list.
pub struct KeywordScanner {
    automaton: AhoCorasick,
    keyword_count: usize,
}

impl KeywordScanner {
    /// Build a case-insensitive scanner over `keywords`. An empty list
    /// yields a scanner that never matches.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_string())
            .collect();
        let keyword_count = patterns.len();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .expect("keyword patterns are valid literals");

        Self {
            automaton,
            keyword_count,
        }
    }

    /// Indices (into the original keyword list) of keywords that occur as a
    /// substring of `text`.
    pub fn found_in(&self, text: &str) -> HashSet<usize> {
        if self.keyword_count == 0 {
            return HashSet::new();
        }
        self.automaton
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect()
    }
}

/// Lowercased `\w+` token set of a document, built once and probed per
/// keyword.
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    pub fn new(text: &str) -> Self {
        Self::from_tokens(word_tokens(text))
    }

    /// Build from already-extracted tokens, e.g. when the caller also needs
    /// them in document order.
    pub fn from_tokens(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.tokens.contains(keyword.to_ascii_lowercase().as_str())
    }
}

/// Case-insensitive substring test, the weaker of the two mention checks.
pub fn mentions_as_substring(text: &str, keyword: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}

/// Case-insensitive whole-token membership against the `\w+` token set.
/// One-off form of [`TokenSet`]; build the set directly when checking many
/// keywords against one document.
pub fn mentions_as_token(text: &str, keyword: &str) -> bool {
    TokenSet::new(text).contains_keyword(keyword)
}

/// Lowercased `\w+` tokens of `text`, in document order.
pub fn word_tokens(text: &str) -> Vec<String> {
    word_re()
        .find_iter(&text.to_ascii_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_mention_is_case_insensitive() {
        assert!(mentions_as_substring("Deployed on KUBERNETES clusters", "kubernetes"));
        assert!(mentions_as_substring("microservices", "services"));
        assert!(!mentions_as_substring("plain text", "docker"));
    }

    #[test]
    fn test_token_mention_requires_whole_token() {
        assert!(mentions_as_token("Skills: Python, SQL", "python"));
        assert!(mentions_as_token("Skills: Python, SQL", "SQL"));
        // Substring of a longer token is not a token match.
        assert!(!mentions_as_token("microservices", "services"));
    }

    #[test]
    fn test_predicates_can_disagree() {
        let text = "We run microservices in production";
        assert!(mentions_as_substring(text, "services"));
        assert!(!mentions_as_token(text, "services"));
    }

    #[test]
    fn test_token_set_agrees_with_predicate() {
        let text = "Experience: shipped Python services on Kubernetes";
        let set = TokenSet::new(text);

        for keyword in ["Python", "kubernetes", "shipped", "Docker", "service"] {
            assert_eq!(
                set.contains_keyword(keyword),
                mentions_as_token(text, keyword),
                "disagreement on {}",
                keyword
            );
        }
    }

    #[test]
    fn test_scanner_finds_keyword_indices() {
        let scanner = KeywordScanner::new(["Python", "Docker", "SQL"]);
        let found = scanner.found_in("python and sql, but no containers");

        assert!(found.contains(&0));
        assert!(found.contains(&2));
        assert!(!found.contains(&1));
    }

    #[test]
    fn test_scanner_with_no_keywords() {
        let scanner = KeywordScanner::new(Vec::<String>::new());
        assert!(scanner.found_in("anything at all").is_empty());
    }
}
