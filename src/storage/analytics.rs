//! Append-only JSONL datastore for analysis and subscriber records
//!
//! One JSON object per line, two files side by side (`analytics.jsonl` and
//! `subscribers.jsonl`). The record shapes match what the hosted dashboard
//! stores per analysis and per newsletter signup.

use crate::error::{AtsAnalyzerError, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// One row per analyzed CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub cv_name: String,
    pub ats_score: u8,
    /// Matched keywords joined by comma.
    pub matched_keywords: String,
    /// Missing keywords joined by comma.
    pub missing_keywords: String,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(cv_name: &str, ats_score: u8, matched: &[String], missing: &[String]) -> Self {
        Self {
            cv_name: cv_name.to_string(),
            ats_score,
            matched_keywords: matched.join(","),
            missing_keywords: missing.join(","),
            timestamp: Utc::now(),
        }
    }
}

/// One row per newsletter signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub email: String,
    pub phone: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SubscriberRecord {
    /// Validate and build a subscriber record. The only email check is the
    /// presence of `@`, matching the signup form's behavior.
    pub fn new(email: &str, phone: Option<&str>) -> Result<Self> {
        if !email.contains('@') {
            return Err(AtsAnalyzerError::InvalidInput(format!(
                "Invalid email address: {}",
                email
            )));
        }
        Ok(Self {
            email: email.to_string(),
            phone: phone.filter(|p| !p.trim().is_empty()).map(String::from),
            timestamp: Utc::now(),
        })
    }
}

pub struct AnalyticsStore {
    dir: PathBuf,
}

impl AnalyticsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn analytics_path(&self) -> PathBuf {
        self.dir.join("analytics.jsonl")
    }

    fn subscribers_path(&self) -> PathBuf {
        self.dir.join("subscribers.jsonl")
    }

    pub async fn log_analysis(&self, record: &AnalysisRecord) -> Result<()> {
        self.append(&self.analytics_path(), record).await?;
        info!(
            "Logged analysis for '{}' (score {})",
            record.cv_name, record.ats_score
        );
        Ok(())
    }

    pub async fn save_subscriber(&self, record: &SubscriberRecord) -> Result<()> {
        self.append(&self.subscribers_path(), record).await?;
        info!("Saved subscriber '{}'", record.email);
        Ok(())
    }

    pub async fn load_analyses(&self) -> Result<Vec<AnalysisRecord>> {
        self.load(&self.analytics_path()).await
    }

    pub async fn load_subscribers(&self) -> Result<Vec<SubscriberRecord>> {
        self.load(&self.subscribers_path()).await
    }

    async fn append<T: Serialize>(&self, path: &Path, record: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| {
                AtsAnalyzerError::Storage(format!(
                    "Failed to open store '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }

    async fn load<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Vec<T>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AtsAnalyzerError::Storage(format!(
                    "Failed to read store '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut records = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            records.push(serde_json::from_str(line)?);
        }
        Ok(records)
    }
}
