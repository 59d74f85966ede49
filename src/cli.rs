//! CLI interface for the ATS CV analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-cv-analyzer")]
#[command(about = "ATS CV analysis, scoring and professional rewriting tool")]
#[command(
    long_about = "Analyze a CV against a job-role keyword list: score ATS friendliness, \
                  report matched and missing keywords, and produce a professionally \
                  rewritten version covering the gaps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CV and optionally rewrite it
    Analyze {
        /// Path to the CV file (PDF, TXT, MD)
        #[arg(short, long)]
        cv: PathBuf,

        /// Explicit keyword file (comma-delimited); overrides role detection
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Role name to pick the keyword file from the keywords directory
        #[arg(short, long)]
        role: Option<String>,

        /// Output format: console, json, markdown, html, pdf
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the professional rewrite step
        #[arg(long)]
        no_rewrite: bool,

        /// Skip persisting the analysis record
        #[arg(long)]
        no_log: bool,

        /// Output detailed analysis (word frequency table)
        #[arg(short, long)]
        detailed: bool,
    },

    /// Manage job-role keyword files
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Show stored analytics (analyses and subscribers)
    Stats,

    /// Sign up for the newsletter
    Subscribe {
        /// Email address
        email: String,

        /// Phone number (optional)
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum RoleAction {
    /// List available role keyword files
    List,

    /// Show the keywords of one role
    Show {
        /// Role name (file stem, e.g. "data_scientist")
        role: String,
    },

    /// Seed the keywords directory with the built-in role files
    Init,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        "pdf" => Ok(crate::config::OutputFormat::Pdf),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html, pdf",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("docx").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(&PathBuf::from("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &allowed).is_err());
    }
}
