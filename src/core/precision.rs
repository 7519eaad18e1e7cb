//! Fixed-precision decimal arithmetic for pricing.
//!
//! Every operation result is rounded to [`SIGNIFICANT_DIGITS`] significant
//! digits, half away from zero, so the same inputs always produce the same
//! monetary values regardless of how they are combined upstream.
//!
//! All helpers are checked: `None` means the result does not fit in a
//! `Decimal` (or, for division, that the divisor is zero).

use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept after each arithmetic step
pub const SIGNIFICANT_DIGITS: u32 = 10;

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds a value to the configured number of significant digits
pub fn round(value: Decimal) -> Decimal {
    value
        .round_sf_with_strategy(SIGNIFICANT_DIGITS, ROUNDING)
        .unwrap_or(value)
}

pub fn add(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_add(b).map(round)
}

pub fn sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_sub(b).map(round)
}

pub fn mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_mul(b).map(round)
}

/// Divides `a` by `b`, returning `None` when `b` is zero
pub fn div(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_div(b).map(round)
}

/// Converts a percentage (e.g. 16) into its fraction of `value` (value × pct / 100)
pub fn percent_of(value: Decimal, percentage: Decimal) -> Option<Decimal> {
    mul(value, percentage).and_then(|scaled| div(scaled, Decimal::ONE_HUNDRED))
}

/// Sums values exactly and rounds the result once
///
/// The inputs are already rounded amounts; rounding only at the end keeps
/// the result independent of their order.
pub fn sum<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .map(round)
}
