//! Shared types for the freight tariff engine
//!
//! Tariff schedules, freight requests, service classes, configuration
//! issues and the error type used across crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{TariffError, TariffResult};
pub use models::{
    CargoType, ConfigIssue, CustomService, FreightRequest, OriginCity, RateSpec, ServiceClass,
    ServiceKind, Stage, TariffSchedule,
};
pub use serde::{Deserialize, Serialize};
