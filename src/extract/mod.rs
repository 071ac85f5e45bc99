//! Price extraction module
//!
//! Scans unstructured page text for monetary amounts and turns each match
//! into a (currency, amount) pair. Parsing failures are dropped silently;
//! they are ordinary noise in scraped text.

mod notation;

pub use notation::{Notation, PriceCandidate};

use crate::config::ExtractionConfig;
use crate::fx::canonical_code;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A parsed monetary mention, not yet converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPrice {
    /// Canonical currency code
    pub currency: String,
    /// Positive amount in `currency`
    pub amount: Decimal,
    pub notation: Notation,
}

/// Extracts prices from text
#[derive(Debug, Clone)]
pub struct PriceExtractor {
    reference_currency: String,
    max_text_chars: usize,
}

impl PriceExtractor {
    /// Create an extractor; unmarked amounts are attributed to `reference_currency`
    pub fn new(reference_currency: &str, max_text_chars: usize) -> Self {
        Self {
            reference_currency: canonical_code(reference_currency),
            max_text_chars,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(&config.reference_currency, config.max_text_chars)
    }

    pub fn reference_currency(&self) -> &str {
        &self.reference_currency
    }

    pub fn max_text_chars(&self) -> usize {
        self.max_text_chars
    }

    /// Raw candidates from every notation, in notation order
    pub fn candidates(&self, text: &str) -> Vec<PriceCandidate> {
        let text = truncate_chars(text, self.max_text_chars);
        Notation::ALL
            .iter()
            .flat_map(|notation| notation.candidates(text))
            .collect()
    }

    /// Parsed prices; malformed or non-positive literals are skipped
    pub fn extract(&self, text: &str) -> Vec<ExtractedPrice> {
        self.candidates(text)
            .into_iter()
            .filter_map(|candidate| {
                let amount = parse_amount(&candidate.raw_amount)?;
                let currency = candidate
                    .currency
                    .as_deref()
                    .map(canonical_code)
                    .unwrap_or_else(|| self.reference_currency.clone());
                Some(ExtractedPrice {
                    currency,
                    amount,
                    notation: candidate.notation,
                })
            })
            .collect()
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

/// Strip grouping separators and parse; `None` for garbage or amounts <= 0
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
