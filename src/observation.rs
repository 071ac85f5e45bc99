//! Normalized price observations

use crate::extract::PriceExtractor;
use crate::fx::ExchangeTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One extracted and converted price mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Page the mention was found on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub currency: String,
    pub amount: Decimal,
    pub amount_in_reference: Decimal,
}

/// Extract every price in `text` and convert it to the table's reference currency
///
/// Prices whose conversion overflows `Decimal` are dropped.
pub fn observe(
    extractor: &PriceExtractor,
    fx: &ExchangeTable,
    source: Option<&str>,
    text: &str,
) -> Vec<PriceObservation> {
    extractor
        .extract(text)
        .into_iter()
        .filter_map(|price| {
            let amount_in_reference =
                fx.to_reference(price.amount, Some(price.currency.as_str()))?;
            Some(PriceObservation {
                source: source.map(str::to_string),
                currency: price.currency,
                amount: price.amount,
                amount_in_reference,
            })
        })
        .collect()
}
