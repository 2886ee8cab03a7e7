//! Freight Request Model

use super::service_class::{CargoType, ServiceClass, ServiceKind};
use serde::{Deserialize, Serialize};

/// Origin city of a shipment (distance from the depot)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OriginCity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub distance_km: f64,
}

impl OriginCity {
    pub fn new(name: impl Into<String>, distance_km: f64) -> Self {
        Self {
            name: Some(name.into()),
            distance_km,
        }
    }
}

/// Input for a single freight calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightRequest {
    #[serde(default)]
    pub weight_kg: f64,
    pub service_class: ServiceClass,
    #[serde(default)]
    pub cargo_type: CargoType,
    /// 0 = no insurance
    #[serde(default)]
    pub declared_value: f64,
    /// Required only for door-to-door interior service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<OriginCity>,
}

impl FreightRequest {
    pub fn new(service_class: impl Into<ServiceClass>, weight_kg: f64) -> Self {
        Self {
            weight_kg,
            service_class: service_class.into(),
            cargo_type: CargoType::Standard,
            declared_value: 0.0,
            origin_city: None,
        }
    }

    pub fn with_cargo_type(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = cargo_type;
        self
    }

    pub fn with_declared_value(mut self, declared_value: f64) -> Self {
        self.declared_value = declared_value;
        self
    }

    pub fn with_origin_city(mut self, city: OriginCity) -> Self {
        self.origin_city = Some(city);
        self
    }

    /// Perishable multiplier applies unless the class is biological
    pub fn is_perishable_surchargeable(&self) -> bool {
        self.cargo_type == CargoType::Perishable && !self.service_class.is_biological()
    }

    /// General insurance applies to every class except reshipment
    pub fn takes_general_insurance(&self) -> bool {
        !self.service_class.is(ServiceKind::Reshipment)
    }
}
