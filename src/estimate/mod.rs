//! Price estimation module
//!
//! Glues fetching, extraction, normalization and aggregation into a single
//! request/report cycle.

mod category;
mod estimator;

pub use category::Category;
pub use estimator::Estimator;

use crate::baseline::Baseline;
use crate::observation::PriceObservation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Shortest query accepted
pub const MIN_QUERY_LEN: usize = 3;

/// Estimation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// Query is shorter than the minimum length
    #[error("Query too short: {0:?}")]
    QueryTooShort(String),
    /// Nothing to fetch
    #[error("No sources given")]
    NoSources,
}

/// A price estimate request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub query: String,
    pub location: Option<String>,
    /// URLs or local paths to scan
    pub sources: Vec<String>,
    /// Cap on sources fetched; config default when unset
    pub max_sources: Option<usize>,
}

impl EstimateRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
            sources: Vec::new(),
            max_sources: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn with_max_sources(mut self, max_sources: usize) -> Self {
        self.max_sources = Some(max_sources);
        self
    }

    fn validate(&self) -> Result<(), EstimateError> {
        if self.query.chars().count() < MIN_QUERY_LEN {
            return Err(EstimateError::QueryTooShort(self.query.clone()));
        }
        if self.sources.is_empty() {
            return Err(EstimateError::NoSources);
        }
        Ok(())
    }
}

/// Result of one estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub id: Uuid,
    pub query: String,
    pub location: Option<String>,
    pub category: Category,
    pub reference_currency: String,
    pub baseline: Option<Baseline>,
    /// Leading observations; `observation_count` has the full total
    pub observations: Vec<PriceObservation>,
    pub observation_count: usize,
    pub sources_fetched: usize,
    pub sources_failed: usize,
    pub notes: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = EstimateRequest::new("petrol price")
            .with_location("Pune")
            .with_sources(["https://a.example", "b.html"])
            .with_max_sources(1);
        assert_eq!(request.location.as_deref(), Some("Pune"));
        assert_eq!(request.sources.len(), 2);
        assert_eq!(request.max_sources, Some(1));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_query_too_short() {
        let request = EstimateRequest::new("ab").with_sources(["x"]);
        assert_eq!(
            request.validate(),
            Err(EstimateError::QueryTooShort("ab".to_string()))
        );
        assert!(EstimateRequest::new("").with_sources(["x"]).validate().is_err());
    }

    #[test]
    fn test_request_query_length_counts_whitespace() {
        let request = EstimateRequest::new(" ab ").with_sources(["x"]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_query_length_counts_chars() {
        // three characters, nine bytes
        let request = EstimateRequest::new("₹₹₹").with_sources(["x"]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_without_sources() {
        let request = EstimateRequest::new("rice 5kg");
        assert_eq!(request.validate(), Err(EstimateError::NoSources));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EstimateError::QueryTooShort("ab".to_string()).to_string(),
            "Query too short: \"ab\""
        );
        assert_eq!(EstimateError::NoSources.to_string(), "No sources given");
    }
}
