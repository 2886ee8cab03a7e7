//! Rate Resolver
//!
//! Maps a requested service class to its rate parameters. Built-in kinds
//! read the schedule's rate table; anything else is looked up by name in the
//! schedule's custom services. Nothing here fails: an unconfigured class
//! resolves to a zero rate and is reported as a [`ConfigIssue`].

use super::money::{non_negative, to_decimal};
use rust_decimal::Decimal;
use shared::models::{
    ConfigIssue, DEFAULT_WEIGHT_THRESHOLD_KG, RateSpec, ServiceClass, ServiceKind, TariffSchedule,
};

/// Class-specific extra parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateExtra {
    None,
    /// Door-to-door interior: charge per km from the origin city
    DistanceRatePerKm(Option<Decimal>),
    /// Reshipment: fraction of the declared value
    InvoicePercentage(Option<Decimal>),
}

/// Rate parameters resolved for one calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRate {
    pub base_rate: Decimal,
    pub excess_rate: Decimal,
    pub weight_threshold_kg: Decimal,
    pub extra: RateExtra,
}

impl ResolvedRate {
    /// Zero charge at the given threshold
    pub fn zero(weight_threshold_kg: Decimal) -> Self {
        Self {
            base_rate: Decimal::ZERO,
            excess_rate: Decimal::ZERO,
            weight_threshold_kg,
            extra: RateExtra::None,
        }
    }
}

/// Resolve the rate parameters for `service_class` against `schedule`
pub fn resolve(
    service_class: &ServiceClass,
    schedule: &TariffSchedule,
    issues: &mut Vec<ConfigIssue>,
) -> ResolvedRate {
    match service_class {
        ServiceClass::Builtin(kind) => resolve_builtin(*kind, schedule, issues),
        ServiceClass::Custom(name) => resolve_custom(name, schedule, issues),
    }
}

fn resolve_builtin(
    kind: ServiceKind,
    schedule: &TariffSchedule,
    issues: &mut Vec<ConfigIssue>,
) -> ResolvedRate {
    let threshold = to_decimal(kind.weight_threshold_kg());

    let Some(spec) = schedule.rate(kind) else {
        issues.push(ConfigIssue::MissingRate {
            service: kind.to_string(),
        });
        let mut zero = ResolvedRate::zero(threshold);
        zero.extra = extra_for(kind, None, issues);
        return zero;
    };

    ResolvedRate {
        base_rate: non_negative(spec.base_rate, &format!("rates.{kind}.baseRate"), issues),
        excess_rate: non_negative(spec.excess_rate, &format!("rates.{kind}.excessRate"), issues),
        weight_threshold_kg: threshold,
        extra: extra_for(kind, Some(spec), issues),
    }
}

fn extra_for(
    kind: ServiceKind,
    spec: Option<&RateSpec>,
    issues: &mut Vec<ConfigIssue>,
) -> RateExtra {
    match kind {
        ServiceKind::DoorToDoorInterior => RateExtra::DistanceRatePerKm(
            spec.and_then(|s| s.distance_rate_per_km)
                .map(|v| non_negative(v, "rates.door_to_door_interior.distanceRatePerKm", issues)),
        ),
        ServiceKind::Reshipment => RateExtra::InvoicePercentage(
            spec.and_then(|s| s.invoice_percentage_rate)
                .map(|v| non_negative(v, "rates.reshipment.invoicePercentageRate", issues)),
        ),
        _ => RateExtra::None,
    }
}

fn resolve_custom(
    name: &str,
    schedule: &TariffSchedule,
    issues: &mut Vec<ConfigIssue>,
) -> ResolvedRate {
    match schedule.custom_service(name) {
        Some(service) => {
            let field = format!("customServices[{}]", service.name);
            ResolvedRate {
                base_rate: non_negative(service.base_rate, &format!("{field}.baseRate"), issues),
                excess_rate: non_negative(
                    service.excess_rate,
                    &format!("{field}.excessRate"),
                    issues,
                ),
                weight_threshold_kg: non_negative(
                    service.min_weight,
                    &format!("{field}.minWeight"),
                    issues,
                ),
                extra: RateExtra::None,
            }
        }
        None => {
            tracing::debug!(service = %name, "No custom service matched");
            issues.push(ConfigIssue::UnknownService {
                name: name.to_string(),
            });
            ResolvedRate::zero(to_decimal(DEFAULT_WEIGHT_THRESHOLD_KG))
        }
    }
}
