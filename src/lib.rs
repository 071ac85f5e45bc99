//! price-estimator: market price estimates from scraped page text
//!
//! This library provides:
//! - Price extraction from unstructured text in several currency notations
//! - Currency normalization through a static exchange-rate table
//! - Trimmed-mean / median / rank-quartile baseline aggregation
//! - Page fetching (HTTP or local files) with HTML-to-text conversion
//! - An estimate pipeline that ties the above together per query
//! - Logging and metrics

pub mod baseline;
pub mod cli;
pub mod config;
pub mod estimate;
pub mod extract;
pub mod fetch;
pub mod fx;
pub mod observation;
pub mod telemetry;
