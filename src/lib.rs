//! ATS CV analyzer library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod output;
pub mod storage;

pub use config::Config;
pub use error::{AtsAnalyzerError, Result};
