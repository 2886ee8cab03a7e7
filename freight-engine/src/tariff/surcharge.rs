//! Special Surcharge Stage
//!
//! Weight-independent surcharges owned by specific classes:
//! - Door-to-door interior: distance from the origin city × per-km rate
//! - Reshipment: declared value × invoice percentage
//!
//! The result joins the running total before the perishable multiplier.

use super::money::{Overflow, mul, to_f64_unrounded};
use super::resolver::{RateExtra, ResolvedRate};
use rust_decimal::Decimal;
use shared::models::{ConfigIssue, ServiceClass, Stage};

/// Inputs the special surcharge reads from the request
#[derive(Debug, Clone, Copy)]
pub struct SurchargeInputs {
    pub declared_value: Decimal,
    /// None when the request carries no origin city
    pub distance_km: Option<Decimal>,
    /// Engine fallback for reshipment schedules without an invoice rate
    pub fallback_invoice_rate: Option<Decimal>,
}

pub fn special_surcharge(
    service_class: &ServiceClass,
    rate: &ResolvedRate,
    inputs: &SurchargeInputs,
    issues: &mut Vec<ConfigIssue>,
) -> Result<Decimal, Overflow> {
    match rate.extra {
        RateExtra::None => Ok(Decimal::ZERO),
        RateExtra::DistanceRatePerKm(per_km) => {
            let Some(distance) = inputs.distance_km else {
                issues.push(ConfigIssue::MissingOriginCity {
                    service: service_class.to_string(),
                });
                return Ok(Decimal::ZERO);
            };
            let Some(per_km) = per_km else {
                issues.push(ConfigIssue::MissingDistanceRate);
                return Ok(Decimal::ZERO);
            };
            mul(distance, per_km, Stage::SpecialSurcharge)
        }
        RateExtra::InvoicePercentage(configured) => {
            if inputs.declared_value.is_zero() {
                return Ok(Decimal::ZERO);
            }
            let rate = match (configured, inputs.fallback_invoice_rate) {
                (Some(rate), _) => rate,
                (None, Some(fallback)) => {
                    issues.push(ConfigIssue::FallbackInvoicePercentage {
                        rate: to_f64_unrounded(fallback),
                    });
                    fallback
                }
                (None, None) => {
                    issues.push(ConfigIssue::MissingInvoicePercentage);
                    return Ok(Decimal::ZERO);
                }
            };
            mul(inputs.declared_value, rate, Stage::SpecialSurcharge)
        }
    }
}
