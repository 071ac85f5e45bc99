//! Estimate pipeline integration tests against local files

use price_estimator::config::Config;
use price_estimator::estimate::{Category, EstimateRequest, Estimator};
use price_estimator::fetch::WebFetcher;
use rust_decimal_macros::dec;
use std::io::Write;

fn write_page(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", body).unwrap();
    file
}

#[tokio::test]
async fn test_estimate_from_local_pages() {
    let text_page = write_page(".txt", "Petrol today: Rs 104 per litre");
    let html_page = write_page(".html", "<p>Petrol at <b>₹106</b> in Pune</p>");

    let config = Config::default();
    let estimator = Estimator::new(WebFetcher::new(&config.fetch).unwrap(), &config);
    let request = EstimateRequest::new("petrol")
        .with_location("Pune")
        .with_sources([
            text_page.path().to_str().unwrap(),
            html_page.path().to_str().unwrap(),
            "/nonexistent/page.txt",
        ]);

    let report = estimator.estimate(&request).await.unwrap();
    assert_eq!(report.category, Category::Fuel);
    assert_eq!(report.sources_fetched, 2);
    assert_eq!(report.sources_failed, 1);
    assert_eq!(report.observation_count, 2);

    let baseline = report.baseline.unwrap();
    assert_eq!(baseline.median, dec!(105));
    assert_eq!(baseline.mean, dec!(105));
    assert_eq!(baseline.low, dec!(104));
    assert_eq!(baseline.high, dec!(106));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["category"], "fuel");
    assert_eq!(json["location"], "Pune");
}

#[test]
fn test_estimate_rejects_short_query() {
    let config = Config::default();
    let estimator = Estimator::new(WebFetcher::new(&config.fetch).unwrap(), &config);
    let request = EstimateRequest::new("tv").with_sources(["page.txt"]);

    let result = tokio_test::block_on(estimator.estimate(&request));
    assert!(result.is_err());
}
