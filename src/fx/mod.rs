//! Currency normalization
//!
//! Converts amounts to the reference currency through a static table of
//! multipliers. Symbol variants are canonicalized to ISO-style codes before
//! lookup; unknown codes pass through at 1.0.

use crate::config::{ExtractionConfig, FxConfig};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Immutable exchange-rate table keyed by canonical currency code
#[derive(Debug, Clone)]
pub struct ExchangeTable {
    reference: String,
    rates: HashMap<String, Decimal>,
}

impl ExchangeTable {
    /// Build a table; the reference currency is always pinned to 1.0
    pub fn new<I, S>(reference: &str, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let reference = canonical_code(reference);
        let mut rates: HashMap<String, Decimal> = rates
            .into_iter()
            .map(|(code, rate)| (canonical_code(code.as_ref()), rate))
            .collect();

        if let Some(rate) = rates.get(&reference) {
            if *rate != Decimal::ONE {
                tracing::warn!(
                    currency = %reference,
                    configured = %rate,
                    "Reference currency rate overridden to 1.0"
                );
            }
        }
        rates.insert(reference.clone(), Decimal::ONE);

        Self { reference, rates }
    }

    /// Build from the `[extraction]` and `[fx]` config sections
    pub fn from_config(extraction: &ExtractionConfig, fx: &FxConfig) -> Self {
        Self::new(
            &extraction.reference_currency,
            fx.rates.iter().map(|(code, rate)| (code.as_str(), *rate)),
        )
    }

    /// Canonical code of the reference currency
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Multiplier for a currency token, 1.0 when unknown
    pub fn rate(&self, token: &str) -> Decimal {
        let code = canonical_code(token);
        match self.rates.get(&code) {
            Some(rate) => *rate,
            None => {
                tracing::debug!(currency = %code, "Unknown currency, assuming reference");
                Decimal::ONE
            }
        }
    }

    /// Express `amount` in the reference currency; `None` if the product overflows
    pub fn to_reference(&self, amount: Decimal, token: Option<&str>) -> Option<Decimal> {
        match token {
            Some(token) if !token.trim().is_empty() => {
                let rate = self.rate(token);
                let converted = amount.checked_mul(rate);
                if converted.is_none() {
                    tracing::debug!(
                        amount = %amount,
                        rate = %rate,
                        "Conversion overflowed, dropping"
                    );
                }
                converted
            }
            _ => Some(amount),
        }
    }

    /// Whether the table lists this currency explicitly
    pub fn contains(&self, token: &str) -> bool {
        self.rates.contains_key(&canonical_code(token))
    }
}

impl Default for ExchangeTable {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default(), &FxConfig::default())
    }
}

/// Canonicalize a currency token (`₹`, `Rs.`, `$`, `usd`, ...) to a code
pub fn canonical_code(token: &str) -> String {
    let upper = token.trim().to_uppercase();
    let upper = upper.trim_end_matches('.').trim_end();
    match upper {
        "₹" | "RS" | "INR" => "INR".to_string(),
        "$" | "USD" => "USD".to_string(),
        "€" | "EUR" => "EUR".to_string(),
        "£" | "GBP" => "GBP".to_string(),
        other => other.to_string(),
    }
}
