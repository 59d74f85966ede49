//! Persistence for analytics and subscriber records

pub mod analytics;

pub use analytics::{AnalysisRecord, AnalyticsStore, SubscriberRecord};
