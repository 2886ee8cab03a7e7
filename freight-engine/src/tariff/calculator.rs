//! Freight Calculator
//!
//! Runs the pipeline for one request:
//! resolve rate → special surcharge → weight charge → adjustments → finalize.
//!
//! Uses rust_decimal throughout; the amount is rounded once, at the end.

use super::adjustment::{AdjustedTotal, AdjustmentParams, apply_adjustments};
use super::money::{Overflow, add, non_negative, round_money, to_f64};
use super::resolver::{RateExtra, ResolvedRate, resolve};
use super::surcharge::{SurchargeInputs, special_surcharge};
use super::weight::{WeightCharge, weight_charge};
use crate::core::EngineConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{ConfigIssue, FreightRequest, Stage, TariffSchedule};

/// Whether the amount was computed from complete configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Computed,
    /// One or more issues were recorded; amount is still usable
    Degraded,
}

/// Intermediate figures (for display/audit)
///
/// Each figure is rounded on its own; only [`FreightQuote::amount`] is
/// authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightBreakdown {
    pub weight_threshold_kg: f64,
    pub base_rate: f64,
    pub excess_weight_kg: f64,
    pub excess_charge: f64,
    pub special_surcharge: f64,
    pub perishable_surcharge: f64,
    pub insurance_surcharge: f64,
    pub multiplier_adjustment: f64,
    pub discount_amount: f64,
}

/// Result of a freight calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightQuote {
    pub amount: f64,
    pub status: QuoteStatus,
    pub breakdown: FreightBreakdown,
    pub issues: Vec<ConfigIssue>,
}

impl FreightQuote {
    pub fn is_degraded(&self) -> bool {
        self.status == QuoteStatus::Degraded
    }
}

/// Compute the freight value for `request` under `schedule`.
///
/// Never fails: configuration gaps degrade to zero-charge components and
/// are listed in [`FreightQuote::issues`].
pub fn quote(
    schedule: &TariffSchedule,
    request: &FreightRequest,
    config: &EngineConfig,
) -> FreightQuote {
    let mut issues = Vec::new();

    let (amount, breakdown) = match price(schedule, request, config, &mut issues) {
        Ok(priced) => (to_f64(finalize(priced.total)), priced.breakdown()),
        Err(overflow) => {
            tracing::warn!(
                service = %request.service_class,
                stage = %overflow.0,
                "Freight calculation overflowed, amount set to zero"
            );
            issues.push(overflow.into());
            (0.0, FreightBreakdown::default())
        }
    };

    let status = if issues.is_empty() {
        QuoteStatus::Computed
    } else {
        QuoteStatus::Degraded
    };

    tracing::debug!(
        service = %request.service_class,
        weight_kg = request.weight_kg,
        amount,
        issues = issues.len(),
        "Freight computed"
    );

    FreightQuote {
        amount,
        status,
        breakdown,
        issues,
    }
}

/// Compute the freight amount with the default engine configuration.
///
/// Issues are logged as warnings and otherwise dropped; use [`quote`] to
/// inspect them.
pub fn compute_freight(schedule: &TariffSchedule, request: &FreightRequest) -> f64 {
    let quote = quote(schedule, request, &EngineConfig::default());
    log_issues(schedule, request, &quote);
    quote.amount
}

/// Log each issue of a quote at warn level
pub fn log_issues(schedule: &TariffSchedule, request: &FreightRequest, quote: &FreightQuote) {
    for issue in &quote.issues {
        tracing::warn!(
            client = schedule.client_id.as_deref().unwrap_or("-"),
            service = %request.service_class,
            "{}",
            issue
        );
    }
}

/// Round to 2 decimal places, then floor at zero
pub fn finalize(total: Decimal) -> Decimal {
    round_money(total).max(Decimal::ZERO)
}

/// Unrounded pipeline output
struct Priced {
    rate: ResolvedRate,
    special: Decimal,
    weight: WeightCharge,
    adjusted: AdjustedTotal,
    total: Decimal,
}

impl Priced {
    fn breakdown(&self) -> FreightBreakdown {
        FreightBreakdown {
            weight_threshold_kg: to_f64(self.rate.weight_threshold_kg),
            base_rate: to_f64(self.weight.base),
            excess_weight_kg: to_f64(self.weight.excess_weight_kg),
            excess_charge: to_f64(self.weight.excess),
            special_surcharge: to_f64(self.special),
            perishable_surcharge: to_f64(self.adjusted.perishable_surcharge),
            insurance_surcharge: to_f64(self.adjusted.insurance_surcharge),
            multiplier_adjustment: to_f64(self.adjusted.multiplier_adjustment),
            discount_amount: to_f64(self.adjusted.discount_amount),
        }
    }
}

fn price(
    schedule: &TariffSchedule,
    request: &FreightRequest,
    config: &EngineConfig,
    issues: &mut Vec<ConfigIssue>,
) -> Result<Priced, Overflow> {
    let weight_kg = non_negative(request.weight_kg, "weightKg", issues);
    let declared_value = non_negative(request.declared_value, "declaredValue", issues);

    // Step 1: Resolve rate
    let rate = resolve(&request.service_class, schedule, issues);

    // Step 2: Special surcharge
    let distance_km = match rate.extra {
        RateExtra::DistanceRatePerKm(_) => request
            .origin_city
            .as_ref()
            .map(|city| non_negative(city.distance_km, "originCity.distanceKm", issues)),
        _ => None,
    };
    let surcharge_inputs = SurchargeInputs {
        declared_value,
        distance_km,
        fallback_invoice_rate: config
            .reshipment_fallback_rate
            .map(|r| non_negative(r, "reshipmentFallbackRate", issues)),
    };
    let special = special_surcharge(&request.service_class, &rate, &surcharge_inputs, issues)?;

    // Step 3: Weight charge
    let weight = weight_charge(weight_kg, &rate)?;
    let running_total = add(special, weight.total()?, Stage::WeightCharge)?;

    // Step 4: Adjustments
    let params = adjustment_params(schedule, request, config, declared_value, issues);
    let adjusted = apply_adjustments(running_total, &params)?;

    Ok(Priced {
        total: adjusted.total,
        rate,
        special,
        weight,
        adjusted,
    })
}

fn adjustment_params(
    schedule: &TariffSchedule,
    request: &FreightRequest,
    config: &EngineConfig,
    declared_value: Decimal,
    issues: &mut Vec<ConfigIssue>,
) -> AdjustmentParams {
    let positive = |d: &Decimal| *d > Decimal::ZERO;

    let perishable_multiplier = if request.is_perishable_surchargeable() {
        Some(non_negative(
            config.perishable_multiplier,
            "perishableMultiplier",
            issues,
        ))
    } else {
        None
    };

    let insurance = if declared_value > Decimal::ZERO && request.takes_general_insurance() {
        Some(non_negative(schedule.insurance_rate, "insuranceRate", issues))
            .filter(positive)
            .map(|rate| (declared_value, rate))
    } else {
        None
    };

    let schedule_multiplier = schedule
        .multiplier
        .map(|m| non_negative(m, "multiplier", issues))
        .filter(positive);

    let discount_percent = schedule
        .default_discount_percent
        .map(|p| non_negative(p, "defaultDiscountPercent", issues))
        .filter(positive);

    AdjustmentParams {
        perishable_multiplier,
        insurance,
        schedule_multiplier,
        discount_percent,
    }
}
