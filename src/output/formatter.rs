//! Output formatters: console, JSON, Markdown, HTML and PDF-ready text

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report in one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badge.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling.
pub struct HtmlFormatter {
    include_styles: bool,
}

/// PDF formatter; emits the plain-text report body a PDF writer consumes.
pub struct PdfFormatter;

/// Coordinates the individual formatters.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    pdf_formatter: PdfFormatter,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ATS CV Analysis Report - {{ cv_name }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #28a745;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #28a745;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .card {
            padding: 8px 12px;
            border-radius: 10px;
            margin-bottom: 6px;
            font-size: 15px;
        }
        .strength { background-color: #e6ffe6; }
        .weakness { background-color: #ffe6e6; }
        .suggestion { background-color: #fff3cd; }
        .keyword {
            display: inline-block;
            padding: 6px 10px;
            border-radius: 8px;
            margin: 4px;
        }
        .matched { background-color: #e6ffe6; }
        .missing { background-color: #ffe6e6; }
        pre {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            white-space: pre-wrap;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS CV Analysis Report</h1>
            <p>{{ cv_name }} | Generated: {{ generated_at }}</p>
            <h2>ATS Score: {{ score }}% <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
        </div>

        <div class="section">
            <h2>Strengths</h2>
            {% for item in strengths %}<div class="card strength">{{ item }}</div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Weaknesses</h2>
            {% for item in weaknesses %}<div class="card weakness">{{ item }}</div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Keywords Analysis</h2>
            {% if has_keyword_source %}<p>Keyword source: {{ keyword_source }}</p>{% endif %}
            <h3>Matched</h3>
            {% for kw in matched %}<span class="keyword matched">{{ kw }}</span>{% endfor %}
            <h3>Missing</h3>
            {% for kw in missing %}<span class="keyword missing">{{ kw }}</span>{% endfor %}
        </div>

        {% if has_suggestions %}
        <div class="section">
            <h2>Suggestions</h2>
            {% for item in suggestions %}<div class="card suggestion">{{ item }}</div>
            {% endfor %}
        </div>
        {% endif %}

        {% if has_rewritten %}
        <div class="section">
            <h2>Professional Rewritten CV</h2>
            <pre>{{ rewritten }}</pre>
        </div>
        {% endif %}

        <div class="metadata">
            <p>Generated by ATS CV Analyzer v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#
)]
struct HtmlReportTemplate {
    include_styles: bool,
    cv_name: String,
    generated_at: String,
    score: u8,
    score_class: String,
    score_label: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    matched: Vec<String>,
    missing: Vec<String>,
    has_keyword_source: bool,
    keyword_source: String,
    has_suggestions: bool,
    suggestions: Vec<String>,
    has_rewritten: bool,
    rewritten: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = score_badge(score);
        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

/// Badge label and console color for an ATS score.
fn score_badge(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("EXCELLENT", Color::Green),
        80..=89 => ("VERY GOOD", Color::BrightGreen),
        70..=79 => ("GOOD", Color::Yellow),
        60..=69 => ("FAIR", Color::BrightYellow),
        50..=59 => ("BELOW AVG", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS CV ANALYSIS", 1));
        output.push_str(&format!(
            "CV: {} | Generated: {}\n",
            report.cv_name,
            report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("ATS-Friendliness Score", 2));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.analysis.ats_score,
            self.format_score_badge(report.analysis.ats_score)
        ));

        if !report.analysis.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths", 3));
            for strength in &report.analysis.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !report.analysis.weaknesses.is_empty() {
            output.push_str(&self.format_header("⚠️ Weaknesses", 3));
            for weakness in &report.analysis.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("🔑 Keywords Analysis", 2));
        if let Some(source) = &report.keyword_source {
            output.push_str(&format!(
                "Using {} keywords from {}\n",
                report.keyword_count, source
            ));
        }
        output.push_str(&format!(
            "Matched: {}\n",
            if report.analysis.matched_keywords.is_empty() {
                "none".to_string()
            } else {
                self.colorize(&report.analysis.matched_keywords.join(", "), Color::Green)
            }
        ));
        output.push_str(&format!(
            "Missing: {}\n",
            if report.analysis.missing_keywords.is_empty() {
                "none".to_string()
            } else {
                self.colorize(&report.analysis.missing_keywords.join(", "), Color::Red)
            }
        ));

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("💡 Suggestions", 3));
            for suggestion in &report.suggestions {
                output.push_str(&format!("  • {}\n", suggestion));
            }
        }

        if self.detailed && !report.analysis.common_words.is_empty() {
            output.push_str(&self.format_header("📋 Top Frequent Words", 3));
            for (word, count) in &report.analysis.common_words {
                output.push_str(&format!("  {:<20} {}\n", word, count));
            }
        }

        if let Some(rewritten) = &report.rewritten_cv {
            output.push_str(&self.format_header("✍️ Professional Rewritten CV", 2));
            output.push_str(rewritten);
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} Generated by ATS CV Analyzer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.analyzer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# ATS CV Analysis: {}\n\n", report.cv_name));
        output.push_str(&format!(
            "**ATS Score:** {}% ({})\n\n",
            report.analysis.ats_score,
            Self::markdown_score_badge(report.analysis.ats_score)
        ));

        output.push_str("## Strengths\n\n");
        for strength in &report.analysis.strengths {
            output.push_str(&format!("- {}\n", strength));
        }
        output.push('\n');

        output.push_str("## Weaknesses\n\n");
        for weakness in &report.analysis.weaknesses {
            output.push_str(&format!("- {}\n", weakness));
        }
        output.push('\n');

        output.push_str("## Keywords\n\n");
        if let Some(source) = &report.keyword_source {
            output.push_str(&format!("Source: `{}` ({} keywords)\n\n", source, report.keyword_count));
        }
        if !report.analysis.matched_keywords.is_empty() {
            output.push_str(&format!(
                "**Matched:** `{}`\n\n",
                report.analysis.matched_keywords.join("`, `")
            ));
        }
        if !report.analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "**Missing:** `{}`\n\n",
                report.analysis.missing_keywords.join("`, `")
            ));
        }

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in &report.suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
            output.push('\n');
        }

        if !report.analysis.common_words.is_empty() {
            output.push_str("## Top Frequent Words\n\n");
            output.push_str("| Word | Count |\n|------|-------|\n");
            for (word, count) in &report.analysis.common_words {
                output.push_str(&format!("| {} | {} |\n", word, count));
            }
            output.push('\n');
        }

        if let Some(rewritten) = &report.rewritten_cv {
            output.push_str("## Professional Rewritten CV\n\n");
            output.push_str("```\n");
            output.push_str(rewritten);
            output.push_str("\n```\n\n");
        }

        if self.include_metadata {
            output.push_str(&format!(
                "---\n*Generated by ATS CV Analyzer v{} on {}*\n",
                report.metadata.analyzer_version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let (score_class, score_label) = match report.analysis.ats_score {
            90..=100 => ("score-excellent", "Excellent"),
            70..=89 => ("score-good", "Good"),
            50..=69 => ("score-fair", "Fair"),
            _ => ("score-poor", "Poor"),
        };

        let template = HtmlReportTemplate {
            include_styles: self.include_styles,
            cv_name: report.cv_name.clone(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            score: report.analysis.ats_score,
            score_class: score_class.to_string(),
            score_label: score_label.to_string(),
            strengths: report.analysis.strengths.clone(),
            weaknesses: report.analysis.weaknesses.clone(),
            matched: report.analysis.matched_keywords.clone(),
            missing: report.analysis.missing_keywords.clone(),
            has_keyword_source: report.keyword_source.is_some(),
            keyword_source: report.keyword_source.clone().unwrap_or_default(),
            has_suggestions: !report.suggestions.is_empty(),
            suggestions: report.suggestions.clone(),
            has_rewritten: report.rewritten_cv.is_some(),
            rewritten: report.rewritten_cv.clone().unwrap_or_default(),
            version: report.metadata.analyzer_version.clone(),
        };

        template.render().map_err(|e| {
            crate::error::AtsAnalyzerError::OutputFormatting(format!(
                "HTML template rendering failed: {}",
                e
            ))
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

// Text-based PDF body; a PDF writer downstream handles the typesetting.
impl PdfFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for PdfFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut content = String::new();

        content.push_str("ATS CV ANALYSIS REPORT\n");
        content.push_str(&"=".repeat(50));
        content.push_str("\n\n");

        content.push_str(&format!("CV: {}\n", report.cv_name));
        content.push_str(&format!(
            "Generated: {}\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        content.push_str(&format!(
            "ATS-Friendliness Score: {}%\n\n",
            report.analysis.ats_score
        ));

        content.push_str("Strengths:\n");
        for strength in &report.analysis.strengths {
            content.push_str(&format!("- {}\n", strength));
        }
        content.push('\n');

        content.push_str("Weaknesses:\n");
        for weakness in &report.analysis.weaknesses {
            content.push_str(&format!("- {}\n", weakness));
        }
        content.push('\n');

        if report.keyword_count > 0 {
            content.push_str("Keywords Analysis:\n");
            content.push_str(&format!(
                "Matched Keywords: {}\n",
                report.analysis.matched_keywords.join(", ")
            ));
            content.push_str(&format!(
                "Missing Keywords: {}\n\n",
                report.analysis.missing_keywords.join(", ")
            ));
        }

        if !report.suggestions.is_empty() {
            content.push_str("Suggestions:\n");
            for suggestion in &report.suggestions {
                content.push_str(&format!("- {}\n", suggestion));
            }
            content.push('\n');
        }

        if let Some(rewritten) = &report.rewritten_cv {
            content.push_str("Professional Rewritten CV:\n");
            content.push_str(rewritten);
            content.push('\n');
        }

        content.push_str(&"=".repeat(50));
        content.push('\n');
        content.push_str(&format!(
            "Generated by ATS CV Analyzer v{}\n",
            report.metadata.analyzer_version
        ));

        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
            pdf_formatter: PdfFormatter::new(),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
            pdf_formatter: PdfFormatter::new(),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
            OutputFormat::Pdf => self.pdf_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, cv_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_report{}.txt", cv_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_report{}.json", cv_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_report{}.md", cv_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_report{}.html", cv_name, timestamp_suffix),
        OutputFormat::Pdf => format!("{}_report{}.pdf", cv_name, timestamp_suffix),
    }
}
