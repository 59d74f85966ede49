//! Professional CV rewriting
//!
//! Rewrites each detected section into bullet form (light lexical cleanup of
//! the original sentences) and appends one synthesized template sentence per
//! keyword the section is missing. Template choice is uniformly random by
//! default; the selector is injectable so tests can pin the wording.

use crate::analysis::matcher::KeywordScanner;
use crate::analysis::sections::{detect_sections, SectionKind};
use crate::keywords::KeywordList;
use rand::Rng;
use regex::Regex;

/// Per-section pools of synthesized-sentence templates, each with one `{}`
/// placeholder. Passed into the rewriter explicitly rather than held as
/// module state, so callers can supply their own wording.
#[derive(Debug, Clone)]
pub struct SectionTemplates {
    summary: Vec<String>,
    skills: Vec<String>,
    experience: Vec<String>,
    education: Vec<String>,
}

impl SectionTemplates {
    pub fn pool(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Summary => &self.summary,
            SectionKind::Skills => &self.skills,
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
        }
    }
}

impl Default for SectionTemplates {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            summary: owned(&[
                "Professional with experience in {}.",
                "Skilled in {}.",
                "Accomplished in {}.",
            ]),
            skills: owned(&[
                "Proficient in {}.",
                "Experienced with {}.",
                "Hands-on experience in {}.",
            ]),
            experience: owned(&[
                "Developed expertise in {}.",
                "Led projects involving {}.",
                "Implemented solutions using {}.",
                "Collaborated with teams to optimize {}.",
            ]),
            education: owned(&[
                "Completed {} degree.",
                "Graduated in {}.",
                "Certified in {}.",
            ]),
        }
    }
}

/// Picks a template index given a pool length. Pools are never empty.
pub type TemplateSelector = Box<dyn Fn(usize) -> usize + Send + Sync>;

pub struct Rewriter {
    templates: SectionTemplates,
    selector: TemplateSelector,
    worked_re: Regex,
    responsible_re: Regex,
    sentence_split_re: Regex,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Rewriter {
    /// Rewriter with the default templates and uniform random template choice.
    pub fn new() -> Self {
        Self::with_selector(
            SectionTemplates::default(),
            Box::new(|len| rand::thread_rng().gen_range(0..len)),
        )
    }

    /// Rewriter with explicit templates and a deterministic or custom
    /// selection strategy.
    pub fn with_selector(templates: SectionTemplates, selector: TemplateSelector) -> Self {
        Self {
            templates,
            selector,
            worked_re: Regex::new(r"(?i)\bworked\b").expect("valid regex"),
            responsible_re: Regex::new(r"(?i)\bresponsible\b").expect("valid regex"),
            sentence_split_re: Regex::new(r"[.\n]").expect("valid regex"),
        }
    }

    /// Rewrite `text` into a bulleted document covering `keywords`.
    ///
    /// Every section is checked against the full keyword list with the
    /// substring mention test; keywords a section lacks are injected there,
    /// so one keyword can legitimately be injected into several sections.
    /// Sections with no original content and nothing to inject are omitted.
    pub fn rewrite(&self, text: &str, keywords: &KeywordList) -> String {
        let sections = detect_sections(text);
        let scanner = KeywordScanner::new(keywords.iter());

        let mut lines: Vec<String> = Vec::new();
        for (kind, span) in sections.iter() {
            let mentioned = scanner.found_in(span);
            let missing: Vec<&str> = keywords
                .iter()
                .enumerate()
                .filter(|(idx, _)| !mentioned.contains(idx))
                .map(|(_, kw)| kw)
                .collect();

            let bullets = self.inject_keywords(span, &missing, kind);
            if !bullets.is_empty() {
                lines.push(format!("{}:", kind.title()));
                lines.extend(bullets);
                lines.push(String::new());
            }
        }

        lines.join("\n")
    }

    /// Bullet list for one section: cleaned-up original sentences followed by
    /// one synthesized sentence per missing keyword.
    fn inject_keywords(
        &self,
        section_text: &str,
        missing_keywords: &[&str],
        kind: SectionKind,
    ) -> Vec<String> {
        let mut bullets: Vec<String> = Vec::new();

        for raw in self.sentence_split_re.split(section_text) {
            let sentence = raw.trim();
            if sentence.is_empty() {
                continue;
            }
            let sentence = self.worked_re.replace_all(sentence, "developed");
            let sentence = self.responsible_re.replace_all(&sentence, "led");
            bullets.push(format!("- {}", sentence));
        }

        for kw in missing_keywords {
            let pool = self.templates.pool(kind);
            let template = &pool[(self.selector)(pool.len())];
            bullets.push(format!("- {}", template.replace("{}", kw)));
        }

        bullets
    }
}
