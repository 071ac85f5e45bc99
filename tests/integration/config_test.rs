//! Configuration integration tests

use price_estimator::config::Config;
use price_estimator::estimate::Estimator;
use price_estimator::fetch::WebFetcher;
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.fetch.max_sources, 6);
    assert_eq!(config.fx.rates.get("USD"), Some(&dec!(84)));
}

#[test]
fn test_custom_reference_currency() {
    let toml = r#"
        [extraction]
        reference_currency = "usd"

        [fx.rates]
        INR = 0.0125
        EUR = 1.1
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    let estimator = Estimator::new(WebFetcher::new(&config.fetch).unwrap(), &config);

    let fx = estimator.exchange_table();
    assert_eq!(fx.reference(), "USD");
    assert_eq!(fx.to_reference(dec!(800), Some("Rs")), Some(dec!(10)));
    assert_eq!(fx.to_reference(dec!(10), Some("€")), Some(dec!(11)));
    assert_eq!(estimator.extractor().reference_currency(), "USD");
}
