//! Baseline aggregation module
//!
//! Collapses converted amounts into a {low, median, mean, high} summary.
//! The mean is trimmed; low/high use fixed rank indexing rather than an
//! interpolated percentile, so reported ranges stay comparable over time.

mod aggregator;

pub use aggregator::{aggregate, NO_DATA_NOTE};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated price summary in the reference currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub low: Decimal,
    pub median: Decimal,
    /// Trimmed mean
    pub mean: Decimal,
    pub high: Decimal,
}

/// Result of aggregation: a baseline, or an explicit "no data" signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BaselineOutcome {
    Estimated(Baseline),
    NoData { note: String },
}

impl BaselineOutcome {
    pub fn baseline(&self) -> Option<&Baseline> {
        match self {
            BaselineOutcome::Estimated(baseline) => Some(baseline),
            BaselineOutcome::NoData { .. } => None,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            BaselineOutcome::Estimated(_) => None,
            BaselineOutcome::NoData { note } => Some(note),
        }
    }

    pub fn is_estimated(&self) -> bool {
        matches!(self, BaselineOutcome::Estimated(_))
    }
}
