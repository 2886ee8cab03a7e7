//! Adjustment Stage
//!
//! Ordered adjustments on the running total (base + excess + special
//! surcharge). Multiplicative and additive steps do not commute, so the
//! order is carried as data in [`STANDARD_ORDER`] and folded left-to-right.
//!
//! Rounding and the zero floor are applied afterwards, once, by the
//! calculator.

use super::money::{Overflow, add, mul};
use rust_decimal::Decimal;
use shared::models::Stage;

/// A single adjustment step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Perishable cargo on a non-biological class: total × multiplier
    Perishable,
    /// Declared value × insurance rate (every class but reshipment)
    Insurance,
    /// Schedule-wide multiplier
    ScheduleMultiplier,
    /// Schedule-wide percentage discount
    ScheduleDiscount,
}

/// Order in which adjustments are applied
pub const STANDARD_ORDER: [Adjustment; 4] = [
    Adjustment::Perishable,
    Adjustment::Insurance,
    Adjustment::ScheduleMultiplier,
    Adjustment::ScheduleDiscount,
];

impl Adjustment {
    pub fn stage(self) -> Stage {
        match self {
            Adjustment::Perishable => Stage::Perishable,
            Adjustment::Insurance => Stage::Insurance,
            Adjustment::ScheduleMultiplier => Stage::ScheduleMultiplier,
            Adjustment::ScheduleDiscount => Stage::ScheduleDiscount,
        }
    }

    /// Signed change this step makes to `total` (zero when not applicable)
    fn delta(self, total: Decimal, params: &AdjustmentParams) -> Result<Decimal, Overflow> {
        let stage = self.stage();
        match self {
            Adjustment::Perishable => match params.perishable_multiplier {
                Some(factor) => Ok(mul(total, factor, stage)? - total),
                None => Ok(Decimal::ZERO),
            },
            Adjustment::Insurance => match params.insurance {
                Some((declared_value, rate)) => mul(declared_value, rate, stage),
                None => Ok(Decimal::ZERO),
            },
            Adjustment::ScheduleMultiplier => match params.schedule_multiplier {
                Some(factor) => Ok(mul(total, factor, stage)? - total),
                None => Ok(Decimal::ZERO),
            },
            Adjustment::ScheduleDiscount => match params.discount_percent {
                Some(percent) => {
                    let amount = mul(total, percent, stage)? / Decimal::ONE_HUNDRED;
                    Ok(-amount)
                }
                None => Ok(Decimal::ZERO),
            },
        }
    }
}

/// Adjustment parameters, already filtered for applicability.
///
/// `None` means the step does not apply to this request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentParams {
    pub perishable_multiplier: Option<Decimal>,
    /// (declared value, insurance rate)
    pub insurance: Option<(Decimal, Decimal)>,
    pub schedule_multiplier: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
}

/// Running total after adjustments, with each step's contribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustedTotal {
    pub total: Decimal,
    pub perishable_surcharge: Decimal,
    pub insurance_surcharge: Decimal,
    pub multiplier_adjustment: Decimal,
    /// Positive amount subtracted by the discount
    pub discount_amount: Decimal,
}

impl AdjustedTotal {
    fn record(&mut self, step: Adjustment, delta: Decimal) {
        match step {
            Adjustment::Perishable => self.perishable_surcharge += delta,
            Adjustment::Insurance => self.insurance_surcharge += delta,
            Adjustment::ScheduleMultiplier => self.multiplier_adjustment += delta,
            Adjustment::ScheduleDiscount => self.discount_amount -= delta,
        }
    }
}

/// Apply the adjustments in [`STANDARD_ORDER`]
pub fn apply_adjustments(
    running_total: Decimal,
    params: &AdjustmentParams,
) -> Result<AdjustedTotal, Overflow> {
    apply_adjustments_in(&STANDARD_ORDER, running_total, params)
}

/// Apply the adjustments in an explicit order
pub fn apply_adjustments_in(
    order: &[Adjustment],
    running_total: Decimal,
    params: &AdjustmentParams,
) -> Result<AdjustedTotal, Overflow> {
    order.iter().try_fold(
        AdjustedTotal {
            total: running_total,
            ..Default::default()
        },
        |mut acc, &step| {
            let delta = step.delta(acc.total, params)?;
            acc.total = add(acc.total, delta, step.stage())?;
            acc.record(step, delta);
            Ok(acc)
        },
    )
}
