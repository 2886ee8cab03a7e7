//! Money helpers
//!
//! Models carry `f64` (as stored); every calculation runs on `Decimal`.

use rust_decimal::prelude::*;
use shared::models::{ConfigIssue, Stage};

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert Decimal to f64 without rounding (rates, fractions)
#[inline]
pub fn to_f64_unrounded(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an input number, replacing negative or non-finite values with zero.
///
/// The replacement is recorded so the quote reports as degraded.
pub fn non_negative(value: f64, field: &str, issues: &mut Vec<ConfigIssue>) -> Decimal {
    match Decimal::from_f64(value) {
        Some(d) if value.is_finite() && d >= Decimal::ZERO => d,
        _ => {
            issues.push(ConfigIssue::InvalidInput {
                field: field.to_string(),
                value,
            });
            Decimal::ZERO
        }
    }
}

/// Decimal overflow inside a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow(pub Stage);

impl From<Overflow> for ConfigIssue {
    fn from(overflow: Overflow) -> Self {
        ConfigIssue::ArithmeticOverflow { stage: overflow.0 }
    }
}

/// Checked multiply tagged with the stage it belongs to
#[inline]
pub fn mul(a: Decimal, b: Decimal, stage: Stage) -> Result<Decimal, Overflow> {
    a.checked_mul(b).ok_or(Overflow(stage))
}

/// Checked add tagged with the stage it belongs to
#[inline]
pub fn add(a: Decimal, b: Decimal, stage: Stage) -> Result<Decimal, Overflow> {
    a.checked_add(b).ok_or(Overflow(stage))
}
