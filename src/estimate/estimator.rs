//! Estimate pipeline: fetch, extract, convert, aggregate

use super::{Category, EstimateError, EstimateReport, EstimateRequest};
use crate::baseline::{aggregate, BaselineOutcome};
use crate::config::Config;
use crate::extract::PriceExtractor;
use crate::fetch::PageFetcher;
use crate::fx::ExchangeTable;
use crate::observation::{observe, PriceObservation};
use crate::telemetry::{
    increment, record_latency, set_gauge, CounterMetric, GaugeMetric, LatencyMetric,
};
use chrono::Utc;
use futures_util::future::join_all;
use rust_decimal::prelude::ToPrimitive;
use std::time::Instant;
use uuid::Uuid;

/// Runs estimate requests against a page fetcher
pub struct Estimator<F> {
    fetcher: F,
    extractor: PriceExtractor,
    fx: ExchangeTable,
    max_sources: usize,
    max_observations: usize,
}

impl<F: PageFetcher> Estimator<F> {
    /// Create an estimator from configuration
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            extractor: PriceExtractor::from_config(&config.extraction),
            fx: ExchangeTable::from_config(&config.extraction, &config.fx),
            max_sources: config.fetch.max_sources,
            max_observations: config.report.max_observations,
        }
    }

    pub fn extractor(&self) -> &PriceExtractor {
        &self.extractor
    }

    pub fn exchange_table(&self) -> &ExchangeTable {
        &self.fx
    }

    /// Fetch every source concurrently and aggregate what they mention
    ///
    /// Sources that fail to fetch or come back empty are skipped; an
    /// estimate with no usable prices still succeeds, carrying a note
    /// instead of a baseline.
    pub async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateReport, EstimateError> {
        request.validate()?;
        let started = Instant::now();

        let category = Category::guess(&request.query);
        let limit = request.max_sources.unwrap_or(self.max_sources);
        let sources: Vec<&str> = request
            .sources
            .iter()
            .map(String::as_str)
            .take(limit)
            .collect();

        tracing::info!(
            query = %request.query,
            location = ?request.location,
            category = %category,
            sources = sources.len(),
            "Estimating price"
        );

        let fetches = sources.iter().map(|source| async move {
            let fetch_started = Instant::now();
            let result = self.fetcher.fetch_text(source).await;
            record_latency(LatencyMetric::PageFetch, fetch_started.elapsed());
            (*source, result)
        });
        let pages = join_all(fetches).await;

        let mut observations: Vec<PriceObservation> = Vec::new();
        let mut sources_fetched = 0;
        let mut sources_failed = 0;

        for (source, result) in pages {
            let text = match result {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => {
                    tracing::warn!(source = %source, "Source returned no text");
                    sources_failed += 1;
                    continue;
                }
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "Failed to fetch source");
                    sources_failed += 1;
                    continue;
                }
            };

            sources_fetched += 1;
            let extract_started = Instant::now();
            let found = observe(&self.extractor, &self.fx, Some(source), &text);
            record_latency(LatencyMetric::Extraction, extract_started.elapsed());

            tracing::debug!(source = %source, observations = found.len(), "Extracted prices");
            observations.extend(found);
        }

        increment(CounterMetric::SourcesFetched, sources_fetched as u64);
        increment(CounterMetric::SourcesFailed, sources_failed as u64);
        increment(CounterMetric::Observations, observations.len() as u64);

        let outcome = aggregate(observations.iter().map(|o| o.amount_in_reference));
        match &outcome {
            BaselineOutcome::Estimated(baseline) => {
                set_gauge(
                    GaugeMetric::BaselineMedian,
                    baseline.median.to_f64().unwrap_or_default(),
                );
                set_gauge(
                    GaugeMetric::BaselineMean,
                    baseline.mean.to_f64().unwrap_or_default(),
                );
            }
            BaselineOutcome::NoData { .. } => increment(CounterMetric::NoBaseline, 1),
        }

        let observation_count = observations.len();
        observations.truncate(self.max_observations);

        let report = EstimateReport {
            id: Uuid::new_v4(),
            query: request.query.clone(),
            location: request.location.clone(),
            category,
            reference_currency: self.fx.reference().to_string(),
            baseline: outcome.baseline().copied(),
            observations,
            observation_count,
            sources_fetched,
            sources_failed,
            notes: outcome.note().map(str::to_string),
            generated_at: Utc::now(),
        };

        record_latency(LatencyMetric::Estimate, started.elapsed());
        tracing::info!(
            id = %report.id,
            observations = observation_count,
            estimated = report.baseline.is_some(),
            "Estimate complete"
        );

        Ok(report)
    }
}
