//! Extraction and aggregation integration tests

use price_estimator::baseline::{aggregate, BaselineOutcome};
use price_estimator::extract::PriceExtractor;
use price_estimator::fetch::html_to_text;
use price_estimator::fx::ExchangeTable;
use price_estimator::observation::observe;
use rust_decimal_macros::dec;

const LISTING: &str = r#"
<html>
  <body>
    <nav>Home | Deals</nav>
    <div class="card"><h2>Pressure cooker 5L</h2><span>₹2,499</span></div>
    <div class="card"><h2>Pressure cooker 5L (import)</h2><span>$35</span></div>
    <div class="card"><h2>Pressure cooker 5L deluxe</h2><span>Rs. 3,100</span></div>
    <script>window.__price = "₹99,999";</script>
  </body>
</html>
"#;

#[test]
fn test_listing_page_to_baseline() {
    let text = html_to_text(LISTING);
    let observations = observe(
        &PriceExtractor::default(),
        &ExchangeTable::default(),
        Some("listing.html"),
        &text,
    );

    // Script contents are never scanned
    assert!(observations.iter().all(|o| o.amount != dec!(99999)));
    assert!(observations
        .iter()
        .any(|o| o.currency == "USD" && o.amount_in_reference == dec!(2940)));

    let outcome = aggregate(observations.iter().map(|o| o.amount_in_reference));
    let baseline = outcome.baseline().copied().unwrap();
    assert!(baseline.low <= baseline.median);
    assert!(baseline.median <= baseline.high);
    assert!(baseline.low >= dec!(2499));
    assert!(baseline.high <= dec!(3100));
}

#[test]
fn test_unknown_currency_unchanged() {
    let fx = ExchangeTable::default();
    for token in ["JPY", "AED", "chf", "¥"] {
        assert_eq!(fx.to_reference(dec!(123.45), Some(token)), Some(dec!(123.45)));
    }
}

#[test]
fn test_prices_past_bound_not_observed() {
    let extractor = PriceExtractor::new("INR", 1_000);
    let text = format!("{}Rs. 500", " filler".repeat(200));
    assert!(extractor.extract(&text).is_empty());

    let default = PriceExtractor::default();
    assert_eq!(default.extract(&text).len(), 1);
}

#[test]
fn test_no_text_no_baseline() {
    let observations = observe(
        &PriceExtractor::default(),
        &ExchangeTable::default(),
        None,
        "Call us for a quote",
    );
    assert!(observations.is_empty());
    assert!(matches!(
        aggregate(observations.iter().map(|o| o.amount_in_reference)),
        BaselineOutcome::NoData { .. }
    ));
}
