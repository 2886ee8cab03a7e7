//! Weight Charge Stage
//!
//! Base rate (covers weight up to the class threshold) plus a per-kg charge
//! for the weight above it.

use super::money::{Overflow, add, mul};
use super::resolver::ResolvedRate;
use rust_decimal::Decimal;
use shared::models::Stage;

/// Weight charge split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightCharge {
    pub base: Decimal,
    pub excess_weight_kg: Decimal,
    pub excess: Decimal,
}

impl WeightCharge {
    pub fn total(&self) -> Result<Decimal, Overflow> {
        add(self.base, self.excess, Stage::WeightCharge)
    }
}

pub fn weight_charge(weight_kg: Decimal, rate: &ResolvedRate) -> Result<WeightCharge, Overflow> {
    let excess_weight_kg = (weight_kg - rate.weight_threshold_kg).max(Decimal::ZERO);
    let excess = mul(excess_weight_kg, rate.excess_rate, Stage::WeightCharge)?;

    Ok(WeightCharge {
        base: rate.base_rate,
        excess_weight_kg,
        excess,
    })
}
