//! CV analysis core: section detection, scoring, suggestions and rewriting

pub mod analyzer;
pub mod matcher;
pub mod rewrite;
pub mod sections;
pub mod suggestions;

pub use analyzer::{AnalysisResult, CvAnalyzer, SectionPresence};
pub use matcher::{mentions_as_substring, mentions_as_token, KeywordScanner, TokenSet};
pub use rewrite::{Rewriter, SectionTemplates};
pub use sections::{detect_sections, SectionKind, SectionMap};
pub use suggestions::suggest_keyword_usage;
