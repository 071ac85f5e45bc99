//! Currency notations recognised in page text
//!
//! Each notation is an independent case-insensitive matcher over the same
//! text. Overlapping matches between notations are expected.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Rupee marker with any literal, or a bare digit-grouped literal
    static ref CURRENCY_PREFIXED: Regex = Regex::new(
        r"(?i)(?:(?P<cur>₹|Rs\.?|INR)\s*(?P<amt>[0-9]+(?:[, ][0-9]{2,3})*(?:\.[0-9]{1,2})?)|(?P<bare>[0-9]{1,3}(?:[, ][0-9]{2,3})+(?:\.[0-9]{1,2})?))"
    ).unwrap();

    /// `$`, `€`, `£` or a Western code, then a comma-grouped decimal
    static ref WESTERN_PREFIXED: Regex = Regex::new(
        r"(?i)(?P<cur>USD|\$|EUR|€|GBP|£)\s*(?P<amt>[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    /// A plain decimal followed by a marker or code
    static ref CURRENCY_SUFFIXED: Regex = Regex::new(
        r"(?i)(?P<amt>[0-9]+(?:\.[0-9]{1,2})?)\s*(?P<cur>INR|₹|Rs\.?|USD|€|EUR|GBP|£)"
    ).unwrap();
}

/// The notation a candidate was matched by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// `₹ 1,200`, `Rs. 12,500`, `INR 4000` or a bare `1,299`
    CurrencyPrefixed,
    /// `$1,299.99`, `EUR 40`
    WesternPrefixed,
    /// `499 Rs`, `20.50 USD`
    CurrencySuffixed,
}

impl Notation {
    /// Notations in scan order
    pub const ALL: [Notation; 3] = [
        Notation::CurrencyPrefixed,
        Notation::WesternPrefixed,
        Notation::CurrencySuffixed,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Notation::CurrencyPrefixed => &CURRENCY_PREFIXED,
            Notation::WesternPrefixed => &WESTERN_PREFIXED,
            Notation::CurrencySuffixed => &CURRENCY_SUFFIXED,
        }
    }

    /// All candidates of this notation in text order
    pub fn candidates(self, text: &str) -> Vec<PriceCandidate> {
        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| self.candidate(&caps))
            .collect()
    }

    fn candidate(self, caps: &Captures<'_>) -> Option<PriceCandidate> {
        let raw_amount = caps.name("amt").or_else(|| caps.name("bare"))?;
        let currency = caps
            .name("cur")
            .map(|m| m.as_str().trim().to_string())
            .filter(|c| !c.is_empty());

        Some(PriceCandidate {
            notation: self,
            currency,
            raw_amount: raw_amount.as_str().to_string(),
        })
    }
}

/// An unparsed monetary mention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCandidate {
    pub notation: Notation,
    /// Marker exactly as written, if any
    pub currency: Option<String>,
    /// Literal with its grouping separators still in place
    pub raw_amount: String,
}
