//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Fetching one source page
    PageFetch,
    /// Extracting and converting prices from one page
    Extraction,
    /// A whole estimate request
    Estimate,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Sources fetched successfully
    SourcesFetched,
    /// Sources that failed to fetch or returned no text at all
    SourcesFailed,
    /// Price observations produced
    Observations,
    /// Estimates that ended without a baseline
    NoBaseline,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Median of the last baseline
    BaselineMedian,
    /// Trimmed mean of the last baseline
    BaselineMean,
}

/// Install the Prometheus exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(port = port, "Prometheus exporter listening");
    Ok(())
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::PageFetch => "price_estimator_page_fetch_latency_ms",
        LatencyMetric::Extraction => "price_estimator_extraction_latency_ms",
        LatencyMetric::Estimate => "price_estimator_estimate_latency_ms",
    };

    let value_ms = duration.as_secs_f64() * 1000.0;
    ::metrics::histogram!(metric_name).record(value_ms);
    tracing::trace!(metric = metric_name, value_ms = value_ms, "Recording latency");
}

/// Increment a counter
pub fn increment(metric: CounterMetric, value: u64) {
    let metric_name = match metric {
        CounterMetric::SourcesFetched => "price_estimator_sources_fetched_total",
        CounterMetric::SourcesFailed => "price_estimator_sources_failed_total",
        CounterMetric::Observations => "price_estimator_observations_total",
        CounterMetric::NoBaseline => "price_estimator_no_baseline_total",
    };

    ::metrics::counter!(metric_name).increment(value);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::BaselineMedian => "price_estimator_baseline_median",
        GaugeMetric::BaselineMean => "price_estimator_baseline_mean",
    };

    ::metrics::gauge!(metric_name).set(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter_is_noop() {
        record_latency(LatencyMetric::PageFetch, Duration::from_millis(12));
        increment(CounterMetric::Observations, 3);
        set_gauge(GaugeMetric::BaselineMedian, 300.0);
    }
}
