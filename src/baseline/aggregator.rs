//! Trimmed-mean / median / rank-quartile aggregation

use super::{Baseline, BaselineOutcome};
use rust_decimal::Decimal;

/// Note attached to an empty outcome
pub const NO_DATA_NOTE: &str =
    "No price observations found. Try adding a city or using a more specific query.";

/// Aggregate reference-currency amounts; non-positive values are ignored
pub fn aggregate<I>(amounts: I) -> BaselineOutcome
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sorted: Vec<Decimal> = amounts
        .into_iter()
        .filter(|amount| *amount > Decimal::ZERO)
        .collect();

    if sorted.is_empty() {
        return BaselineOutcome::NoData {
            note: NO_DATA_NOTE.to_string(),
        };
    }

    sorted.sort();
    let n = sorted.len();

    // floor(0.2n), floor(0.25n), floor(0.75n) on integers
    let k = (n / 5).max(1);
    let trimmed = if n > 2 * k {
        &sorted[k..n - k]
    } else {
        &sorted[..]
    };

    let baseline = Baseline {
        low: sorted[(n / 4).saturating_sub(1)],
        median: median(&sorted),
        mean: mean(trimmed),
        high: sorted[(n - 1).min(3 * n / 4)],
    };

    tracing::debug!(
        count = n,
        trimmed = trimmed.len(),
        low = %baseline.low,
        median = %baseline.median,
        mean = %baseline.mean,
        high = %baseline.high,
        "Baseline computed"
    );

    BaselineOutcome::Estimated(baseline)
}

/// Median of a non-empty sorted slice
fn median(sorted: &[Decimal]) -> Decimal {
    let n = sorted.len();
    if n % 2 == 1 {
        return sorted[n / 2];
    }

    let (lo, hi) = (sorted[n / 2 - 1], sorted[n / 2]);
    match lo.checked_add(hi) {
        Some(sum) => sum / Decimal::TWO,
        // lo <= hi, so the midpoint never leaves [lo, hi]
        None => lo + (hi - lo) / Decimal::TWO,
    }
}

/// Arithmetic mean of a non-empty slice of positive values
fn mean(values: &[Decimal]) -> Decimal {
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value));

    match sum {
        Some(sum) => sum / Decimal::from(values.len()),
        None => running_mean(values),
    }
}

/// Incremental mean; each step stays within the range of the inputs
fn running_mean(values: &[Decimal]) -> Decimal {
    let mut mean = values[0];
    for (i, value) in values.iter().enumerate().skip(1) {
        mean += (*value - mean) / Decimal::from(i + 1);
    }
    mean
}
