//! CV analysis: section presence, word frequency, keyword matching, scoring

use crate::analysis::matcher::{word_tokens, TokenSet};
use crate::keywords::KeywordList;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presence flags for the five section signals the analyzer checks.
///
/// These patterns are independent of the section detector's header aliases
/// (notably, "contact" exists only here), so the two components can
/// legitimately disagree about what counts as a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub summary: bool,
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
    pub contact: bool,
}

impl SectionPresence {
    /// Number of present sections out of the fixed five.
    pub fn present_count(&self) -> usize {
        [
            self.summary,
            self.skills,
            self.experience,
            self.education,
            self.contact,
        ]
        .iter()
        .filter(|&&p| p)
        .count()
    }

    /// (name, present) pairs in fixed report order.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("Summary", self.summary),
            ("Skills", self.skills),
            ("Experience", self.experience),
            ("Education", self.education),
            ("Contact", self.contact),
        ]
    }
}

/// Result of a single CV analysis. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sections: SectionPresence,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Top 20 word/count pairs, most frequent first; ties keep first-seen order.
    pub common_words: Vec<(String, usize)>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Composite ATS friendliness score, always in 0..=100.
    pub ats_score: u8,
}

const TOTAL_SECTIONS: usize = 5;
const TOP_WORDS: usize = 20;

/// Analyzer with its presence patterns compiled once.
pub struct CvAnalyzer {
    summary_re: Regex,
    skills_re: Regex,
    experience_re: Regex,
    education_re: Regex,
    contact_re: Regex,
}

impl Default for CvAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CvAnalyzer {
    pub fn new() -> Self {
        Self {
            summary_re: Regex::new(r"(?i)summary|profile|about me").expect("valid regex"),
            skills_re: Regex::new(r"(?i)skills|technologies|competencies").expect("valid regex"),
            experience_re: Regex::new(r"(?i)experience|employment|work history")
                .expect("valid regex"),
            education_re: Regex::new(r"(?i)education|qualification|degree").expect("valid regex"),
            contact_re: Regex::new(r"(?i)email|phone|contact").expect("valid regex"),
        }
    }

    /// Analyze `text` against `keywords`.
    ///
    /// Pure and deterministic; never fails for any string input, including
    /// the empty string and an empty keyword list.
    pub fn analyze(&self, text: &str, keywords: &KeywordList) -> AnalysisResult {
        let sections = SectionPresence {
            summary: self.summary_re.is_match(text),
            skills: self.skills_re.is_match(text),
            experience: self.experience_re.is_match(text),
            education: self.education_re.is_match(text),
            contact: self.contact_re.is_match(text),
        };

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for (name, present) in sections.entries() {
            if present {
                strengths.push(format!("{} section is present.", name));
            } else {
                weaknesses.push(format!("{} section missing.", name));
            }
        }

        let tokens = word_tokens(text);
        let common_words = top_words(&tokens, TOP_WORDS);

        let token_set = TokenSet::from_tokens(tokens);
        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();
        for kw in keywords.iter() {
            if token_set.contains_keyword(kw) {
                matched_keywords.push(kw.to_string());
            } else {
                missing_keywords.push(kw.to_string());
            }
        }

        let section_score =
            sections.present_count() as f64 / TOTAL_SECTIONS as f64 * 50.0;
        let keyword_score = if keywords.is_empty() {
            0.0
        } else {
            matched_keywords.len() as f64 / keywords.len() as f64 * 50.0
        };
        // Truncation, not rounding; the sum is at most 100 by construction.
        let ats_score = (section_score + keyword_score) as u8;

        AnalysisResult {
            sections,
            strengths,
            weaknesses,
            common_words,
            matched_keywords,
            missing_keywords,
            ats_score,
        }
    }
}

/// Frequency table of `tokens`, keeping the `limit` most common entries.
/// Ties are broken by first-encounter order (stable sort on count only).
fn top_words(tokens: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in tokens {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            first_seen.push(token.as_str());
        }
        *entry += 1;
    }

    let mut table: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|word| (word.to_string(), counts[word]))
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table.truncate(limit);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordList;

    fn keywords(list: &[&str]) -> KeywordList {
        KeywordList::from_comma_separated(&list.join(", "))
    }

    #[test]
    fn test_scenario_skills_and_experience() {
        let analyzer = CvAnalyzer::new();
        let text = "Skills: Python, SQL\nExperience: Worked on ETL pipelines";
        let result = analyzer.analyze(text, &keywords(&["Python", "SQL", "Docker"]));

        assert!(result.sections.skills);
        assert!(result.sections.experience);
        assert!(!result.sections.summary);
        assert!(!result.sections.education);
        assert!(!result.sections.contact);

        assert_eq!(result.matched_keywords, vec!["Python", "SQL"]);
        assert_eq!(result.missing_keywords, vec!["Docker"]);

        // 2/5 sections -> 20, 2/3 keywords -> 33.33, truncated sum -> 53.
        assert_eq!(result.ats_score, 53);
    }

    #[test]
    fn test_empty_input_empty_keywords() {
        let analyzer = CvAnalyzer::new();
        let result = analyzer.analyze("", &KeywordList::default());

        assert_eq!(result.sections.present_count(), 0);
        assert!(result.strengths.is_empty());
        assert_eq!(result.weaknesses.len(), 5);
        assert!(result.common_words.is_empty());
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.ats_score, 0);
    }

    #[test]
    fn test_keyword_partition_preserves_order() {
        let analyzer = CvAnalyzer::new();
        let text = "Skills: Rust, Docker and Kafka";
        let kws = keywords(&["Kafka", "Python", "Rust", "Go", "Docker"]);
        let result = analyzer.analyze(text, &kws);

        assert_eq!(result.matched_keywords, vec!["Kafka", "Rust", "Docker"]);
        assert_eq!(result.missing_keywords, vec!["Python", "Go"]);
        assert_eq!(
            result.matched_keywords.len() + result.missing_keywords.len(),
            kws.len()
        );
    }

    #[test]
    fn test_keyword_match_is_whole_token_not_substring() {
        let analyzer = CvAnalyzer::new();
        // "services" only occurs inside "microservices".
        let text = "Experience: built microservices";
        let result = analyzer.analyze(text, &keywords(&["services"]));

        assert_eq!(result.matched_keywords, Vec::<String>::new());
        assert_eq!(result.missing_keywords, vec!["services"]);
    }

    #[test]
    fn test_score_bounds_and_no_clamping_needed() {
        let analyzer = CvAnalyzer::new();
        // All five sections present and all keywords matched: exactly 100.
        let text = "Summary: dev\nSkills: Rust\nExperience: work\nEducation: BSc\nEmail: a@b.c";
        let result = analyzer.analyze(text, &keywords(&["Rust"]));
        assert_eq!(result.ats_score, 100);

        // Section-only contribution for an empty keyword list.
        let result = analyzer.analyze(text, &KeywordList::default());
        assert_eq!(result.ats_score, 50);
    }

    #[test]
    fn test_idempotence() {
        let analyzer = CvAnalyzer::new();
        let text = "Skills: Python\nExperience: data pipelines and Python tooling";
        let kws = keywords(&["Python", "Airflow"]);

        let first = analyzer.analyze(text, &kws);
        let second = analyzer.analyze(text, &kws);
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_words_ties_keep_first_seen_order() {
        let tokens: Vec<String> = "beta alpha beta alpha gamma"
            .split_whitespace()
            .map(String::from)
            .collect();
        let table = top_words(&tokens, 20);

        assert_eq!(
            table,
            vec![
                ("beta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_words_truncates_to_limit() {
        let tokens: Vec<String> = (0..30).map(|i| format!("word{}", i)).collect();
        let table = top_words(&tokens, 20);
        assert_eq!(table.len(), 20);
    }
}
