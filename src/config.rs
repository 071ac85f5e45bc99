//! Configuration types for price-estimator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub fx: FxConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price extraction configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Currency assumed when a match carries no marker
    #[serde(default = "default_reference_currency")]
    pub reference_currency: String,

    /// Only this many leading characters of a page are scanned
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

fn default_reference_currency() -> String {
    "INR".to_string()
}
fn default_max_text_chars() -> usize {
    200_000
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reference_currency: default_reference_currency(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

/// Static exchange rates, expressed as multipliers to the reference currency
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FxConfig {
    #[serde(default = "default_rates")]
    pub rates: BTreeMap<String, Decimal>,
}

fn default_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("INR".to_string(), Decimal::ONE),
        ("USD".to_string(), Decimal::new(84, 0)),
        ("EUR".to_string(), Decimal::new(92, 0)),
        ("GBP".to_string(), Decimal::new(108, 0)),
    ])
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
        }
    }
}

/// Page fetching configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on sources fetched per estimate
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Bytes read from a page body before the rest is discarded
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_timeout_secs() -> u64 {
    20
}
fn default_user_agent() -> String {
    "PriceEstimatorBot".to_string()
}
fn default_max_sources() -> usize {
    6
}
fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_sources: default_max_sources(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Report shaping configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Observations listed in a report (all of them still feed the baseline)
    #[serde(default = "default_max_observations")]
    pub max_observations: usize,
}

fn default_max_observations() -> usize {
    50
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_observations: default_max_observations(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormatConfig,

    /// Prometheus exporter port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormatConfig::default(),
            metrics_port: None,
        }
    }
}

/// Log output format as written in the config file
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
