//! Error handling for the ATS CV analyzer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Keyword loading error: {0}")]
    KeywordLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        AtsAnalyzerError::InvalidInput(err.to_string())
    }
}
