//! Tariff Schedule Model
//!
//! Client-specific tariff configuration. Read-only during a calculation.

use super::service_class::{ServiceKind, normalize_label};
use crate::error::{TariffError, TariffResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Rate parameters for one service class
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSpec {
    /// Minimum charge, covers weight up to the class threshold
    #[serde(default)]
    pub base_rate: f64,
    /// Charge per kg above the threshold
    #[serde(default)]
    pub excess_rate: f64,
    /// Door-to-door interior only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_rate_per_km: Option<f64>,
    /// Reshipment only (fraction of declared value, 0.01 = 1%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_percentage_rate: Option<f64>,
}

impl RateSpec {
    pub fn new(base_rate: f64, excess_rate: f64) -> Self {
        Self {
            base_rate,
            excess_rate,
            ..Default::default()
        }
    }

    pub fn with_distance_rate(mut self, per_km: f64) -> Self {
        self.distance_rate_per_km = Some(per_km);
        self
    }

    pub fn with_invoice_percentage(mut self, rate: f64) -> Self {
        self.invoice_percentage_rate = Some(rate);
        self
    }
}

/// Schedule-defined service outside the built-in set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomService {
    pub name: String,
    #[serde(default)]
    pub base_rate: f64,
    #[serde(default)]
    pub excess_rate: f64,
    /// Weight threshold for this service (kg)
    #[serde(default)]
    pub min_weight: f64,
}

/// Tariff schedule for one client account
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TariffSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<ServiceKind, RateSpec>,
    /// Fraction of declared value charged as insurance (all classes but reshipment)
    #[serde(default)]
    pub insurance_rate: f64,
    /// Whole-amount multiplier; absent or 0 = not applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    /// Percentage discount (10 = 10%); absent or 0 = not applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_discount_percent: Option<f64>,
    #[serde(default)]
    pub custom_services: Vec<CustomService>,
}

impl TariffSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, kind: ServiceKind, spec: RateSpec) -> Self {
        self.rates.insert(kind, spec);
        self
    }

    pub fn with_insurance_rate(mut self, rate: f64) -> Self {
        self.insurance_rate = rate;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_discount_percent(mut self, percent: f64) -> Self {
        self.default_discount_percent = Some(percent);
        self
    }

    pub fn with_custom_service(mut self, service: CustomService) -> Self {
        self.custom_services.push(service);
        self
    }

    pub fn rate(&self, kind: ServiceKind) -> Option<&RateSpec> {
        self.rates.get(&kind)
    }

    /// Case-insensitive lookup into the custom service list
    pub fn custom_service(&self, name: &str) -> Option<&CustomService> {
        let key = normalize_label(name);
        self.custom_services
            .iter()
            .find(|s| normalize_label(&s.name) == key)
    }

    /// Check the schedule for hard configuration errors.
    ///
    /// The pricing path tolerates everything reported here; this is for
    /// the write side (admin edits, imports) to reject bad schedules.
    pub fn validate(&self) -> TariffResult<()> {
        for (kind, spec) in &self.rates {
            let prefix = format!("rates.{kind}");
            require_rate(spec.base_rate, &format!("{prefix}.baseRate"))?;
            require_rate(spec.excess_rate, &format!("{prefix}.excessRate"))?;
            if let Some(per_km) = spec.distance_rate_per_km {
                require_rate(per_km, &format!("{prefix}.distanceRatePerKm"))?;
            }
            if let Some(rate) = spec.invoice_percentage_rate {
                require_rate(rate, &format!("{prefix}.invoicePercentageRate"))?;
            }
        }

        require_rate(self.insurance_rate, "insuranceRate")?;
        if let Some(multiplier) = self.multiplier {
            require_rate(multiplier, "multiplier")?;
        }
        if let Some(percent) = self.default_discount_percent {
            require_rate(percent, "defaultDiscountPercent")?;
            if percent > 100.0 {
                return Err(TariffError::invalid_schedule(
                    "defaultDiscountPercent",
                    format!("must be between 0 and 100, got {percent}"),
                ));
            }
        }

        let mut seen = HashSet::new();
        for service in &self.custom_services {
            let key = normalize_label(&service.name);
            let field = format!("customServices[{}]", service.name);
            if key.is_empty() {
                return Err(TariffError::invalid_schedule(
                    "customServices",
                    "custom service name must not be empty",
                ));
            }
            if ServiceKind::from_label(&key).is_some() {
                return Err(TariffError::invalid_schedule(
                    field,
                    "name shadows a built-in service class",
                ));
            }
            if !seen.insert(key) {
                return Err(TariffError::invalid_schedule(field, "duplicate custom service name"));
            }
            require_rate(service.base_rate, &format!("{field}.baseRate"))?;
            require_rate(service.excess_rate, &format!("{field}.excessRate"))?;
            require_rate(service.min_weight, &format!("{field}.minWeight"))?;
        }

        Ok(())
    }
}

fn require_rate(value: f64, field: &str) -> TariffResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TariffError::invalid_schedule(
            field,
            format!("must be a finite non-negative number, got {value}"),
        ));
    }
    Ok(())
}
