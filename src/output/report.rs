//! Report assembly: everything a renderer needs for one analyzed CV

use crate::analysis::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full report for one CV: analysis outcome, advisory suggestions and the
/// optionally rewritten document, plus generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// CV file stem, used in headings and persisted records.
    pub cv_name: String,

    /// Where the keyword list came from (role file path or role name), if any.
    pub keyword_source: Option<String>,

    /// Number of keywords the CV was scored against.
    pub keyword_count: usize,

    /// The analyzer's output.
    pub analysis: AnalysisResult,

    /// One advisory sentence per keyword worth adding.
    pub suggestions: Vec<String>,

    /// Professionally rewritten CV, when rewriting was requested.
    pub rewritten_cv: Option<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
}

impl AnalysisReport {
    pub fn new(
        cv_name: &str,
        keyword_source: Option<String>,
        keyword_count: usize,
        analysis: AnalysisResult,
        suggestions: Vec<String>,
        rewritten_cv: Option<String>,
    ) -> Self {
        Self {
            cv_name: cv_name.to_string(),
            keyword_source,
            keyword_count,
            analysis,
            suggestions,
            rewritten_cv,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
