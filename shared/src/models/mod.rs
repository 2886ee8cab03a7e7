//! Data models for freight pricing
//!
//! Wire format is camelCase JSON, as produced by the tariff configuration store.

pub mod freight;
pub mod issue;
pub mod service_class;
pub mod tariff;

pub use freight::{FreightRequest, OriginCity};
pub use issue::{ConfigIssue, Stage};
pub use service_class::{
    CargoType, DEFAULT_WEIGHT_THRESHOLD_KG, HEAVY_WEIGHT_THRESHOLD_KG, ServiceClass, ServiceKind,
    normalize_label,
};
pub use tariff::{CustomService, RateSpec, TariffSchedule};
