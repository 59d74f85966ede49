//! Header-based section detection
//!
//! Partitions a CV into named spans by scanning for known header phrases.
//! Matching is purely lexical: a header counts only when it is immediately
//! followed by `:` or a newline. ASCII case folding keeps byte offsets into
//! the original text valid.

use serde::{Deserialize, Serialize};

/// The section kinds the detector and rewrite engine operate on.
///
/// The analyzer's presence flags additionally track a "contact" signal,
/// but that one has no header aliases and no span, so it lives outside
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
}

impl SectionKind {
    /// Fixed document order, also the detector's scan order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
    ];

    /// Header phrases that open this section, in priority order.
    pub fn header_aliases(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &["summary", "profile", "about me", "professional summary"],
            SectionKind::Skills => &["skills", "technologies", "competencies"],
            SectionKind::Experience => &["experience", "employment", "work history", "projects"],
            SectionKind::Education => &["education", "qualification", "degree", "academics"],
        }
    }

    /// Capitalized display name, used for rewritten-section headers.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Mapping from each section kind to its detected text span.
///
/// Always holds exactly the four kinds; a kind with no detected header maps
/// to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionMap {
    spans: [String; 4],
}

impl SectionMap {
    pub fn get(&self, kind: SectionKind) -> &str {
        &self.spans[kind as usize]
    }

    fn set(&mut self, kind: SectionKind, span: String) {
        self.spans[kind as usize] = span;
    }

    /// Iterate the four kinds in fixed document order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> {
        SectionKind::ALL
            .iter()
            .map(move |&kind| (kind, self.get(kind)))
    }
}

/// Find the earliest occurrence of `alias` in `lowered` that is immediately
/// followed by `:` or `\n`. Returns (match start, content start), where the
/// content start is just past the delimiter.
fn find_header(lowered: &str, alias: &str, from: usize) -> Option<(usize, usize)> {
    let mut search_from = from;
    while let Some(rel) = lowered[search_from..].find(alias) {
        let start = search_from + rel;
        let after = start + alias.len();
        match lowered.as_bytes().get(after) {
            Some(b':') | Some(b'\n') => return Some((start, after + 1)),
            _ => search_from = after,
        }
    }
    None
}

/// Detect the four CV sections in `text`.
///
/// For each kind the first matching header alias wins; its span runs from
/// just past the header delimiter to the nearest subsequent header of any
/// *other* kind, or to end of text. A kind's own header reappearing later
/// does not bound its span; that asymmetry is long-standing behavior and is
/// kept as-is.
pub fn detect_sections(text: &str) -> SectionMap {
    let lowered = text.to_ascii_lowercase();
    let mut map = SectionMap::default();

    for &kind in &SectionKind::ALL {
        for alias in kind.header_aliases() {
            if let Some((_, content_start)) = find_header(&lowered, alias, 0) {
                let mut span_end = text.len();
                for &other in &SectionKind::ALL {
                    if other == kind {
                        continue;
                    }
                    for other_alias in other.header_aliases() {
                        if let Some((other_start, _)) =
                            find_header(&lowered, other_alias, content_start)
                        {
                            if other_start < span_end {
                                span_end = other_start;
                            }
                        }
                    }
                }
                map.set(kind, text[content_start..span_end].trim().to_string());
                break;
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_detection() {
        let text = "Skills: Python, SQL\nExperience: Worked on ETL pipelines";
        let sections = detect_sections(text);

        assert_eq!(sections.get(SectionKind::Skills), "Python, SQL");
        assert_eq!(
            sections.get(SectionKind::Experience),
            "Worked on ETL pipelines"
        );
        assert_eq!(sections.get(SectionKind::Summary), "");
        assert_eq!(sections.get(SectionKind::Education), "");
    }

    #[test]
    fn test_newline_delimited_headers() {
        let text = "Summary\nSeasoned engineer.\nEducation\nBSc Computer Science";
        let sections = detect_sections(text);

        assert_eq!(sections.get(SectionKind::Summary), "Seasoned engineer.");
        assert_eq!(sections.get(SectionKind::Education), "BSc Computer Science");
    }

    #[test]
    fn test_alias_priority_order() {
        // "profile" appears earlier in the text, but "summary" is the first
        // alias tried and it is present, so its span wins.
        let text = "Profile: old blurb\nSummary: new blurb\nSkills: Rust";
        let sections = detect_sections(text);

        assert_eq!(sections.get(SectionKind::Summary), "new blurb");
    }

    #[test]
    fn test_header_requires_delimiter() {
        // "skills" embedded mid-sentence without `:` or newline after it
        // is not a header.
        let text = "I have many skills indeed";
        let sections = detect_sections(text);
        assert_eq!(sections.get(SectionKind::Skills), "");
    }

    #[test]
    fn test_returns_all_four_kinds_for_any_input() {
        for text in ["", "no headers here", "Skills:\n"] {
            let sections = detect_sections(text);
            let mut count = 0;
            for (_, span) in sections.iter() {
                assert!(text.contains(span) || span.is_empty());
                count += 1;
            }
            assert_eq!(count, 4);
        }
    }

    #[test]
    fn test_span_is_trimmed_substring() {
        let text = "Education:\n  MSc Data Science  \n\nSkills: Spark";
        let sections = detect_sections(text);
        let edu = sections.get(SectionKind::Education);
        assert_eq!(edu, "MSc Data Science");
        assert!(text.contains(edu));
    }

    #[test]
    fn test_own_header_does_not_bound_span() {
        // A second "skills" header later in the text does not terminate the
        // first skills span; only other kinds' headers do.
        let text = "Skills: Rust\nMore skills:\nPython";
        let sections = detect_sections(text);
        assert_eq!(sections.get(SectionKind::Skills), "Rust\nMore skills:\nPython");
    }

    #[test]
    fn test_nearest_other_header_bounds_span() {
        let text = "Experience: built things\nEducation: BSc\nSkills: Go";
        let sections = detect_sections(text);
        assert_eq!(sections.get(SectionKind::Experience), "built things");
        assert_eq!(sections.get(SectionKind::Education), "BSc");
    }
}
