//! Service Class Model
//!
//! Built-in freight service offerings plus the open `Custom` extension point
//! backed by the schedule's named custom services.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default weight covered by the base rate (kg)
pub const DEFAULT_WEIGHT_THRESHOLD_KG: f64 = 10.0;

/// Weight covered by the base rate for vehicle-bound classes (kg)
pub const HEAVY_WEIGHT_THRESHOLD_KG: f64 = 100.0;

/// Built-in service class (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Standard,
    EmergencyCollection,
    SaturdayCollection,
    ExclusiveVehicle,
    Scheduled,
    DifficultAccess,
    MetropolitanRegion,
    SundayHoliday,
    BiologicalNormal,
    BiologicalInfectious,
    TrackedVehicle,
    DoorToDoorInterior,
    Reshipment,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 13] = [
        ServiceKind::Standard,
        ServiceKind::EmergencyCollection,
        ServiceKind::SaturdayCollection,
        ServiceKind::ExclusiveVehicle,
        ServiceKind::Scheduled,
        ServiceKind::DifficultAccess,
        ServiceKind::MetropolitanRegion,
        ServiceKind::SundayHoliday,
        ServiceKind::BiologicalNormal,
        ServiceKind::BiologicalInfectious,
        ServiceKind::TrackedVehicle,
        ServiceKind::DoorToDoorInterior,
        ServiceKind::Reshipment,
    ];

    /// Wire name (snake_case)
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Standard => "standard",
            ServiceKind::EmergencyCollection => "emergency_collection",
            ServiceKind::SaturdayCollection => "saturday_collection",
            ServiceKind::ExclusiveVehicle => "exclusive_vehicle",
            ServiceKind::Scheduled => "scheduled",
            ServiceKind::DifficultAccess => "difficult_access",
            ServiceKind::MetropolitanRegion => "metropolitan_region",
            ServiceKind::SundayHoliday => "sunday_holiday",
            ServiceKind::BiologicalNormal => "biological_normal",
            ServiceKind::BiologicalInfectious => "biological_infectious",
            ServiceKind::TrackedVehicle => "tracked_vehicle",
            ServiceKind::DoorToDoorInterior => "door_to_door_interior",
            ServiceKind::Reshipment => "reshipment",
        }
    }

    /// Weight up to which the base rate alone covers the shipment
    pub fn weight_threshold_kg(self) -> f64 {
        match self {
            ServiceKind::TrackedVehicle | ServiceKind::DoorToDoorInterior => {
                HEAVY_WEIGHT_THRESHOLD_KG
            }
            _ => DEFAULT_WEIGHT_THRESHOLD_KG,
        }
    }

    /// Biological classes price spoilage risk into their own rates
    pub fn is_biological(self) -> bool {
        matches!(
            self,
            ServiceKind::BiologicalNormal | ServiceKind::BiologicalInfectious
        )
    }

    /// Match a label against the built-in names.
    ///
    /// Case-insensitive; `-` and spaces are treated as `_`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = normalize_label(label).replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized lookup key for service names (trimmed, lowercase)
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Requested service class: a built-in kind or a schedule-defined custom name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceClass {
    Builtin(ServiceKind),
    Custom(String),
}

impl ServiceClass {
    pub fn kind(&self) -> Option<ServiceKind> {
        match self {
            ServiceClass::Builtin(kind) => Some(*kind),
            ServiceClass::Custom(_) => None,
        }
    }

    pub fn is(&self, kind: ServiceKind) -> bool {
        self.kind() == Some(kind)
    }

    pub fn is_biological(&self) -> bool {
        self.kind().is_some_and(ServiceKind::is_biological)
    }
}

impl From<ServiceKind> for ServiceClass {
    fn from(kind: ServiceKind) -> Self {
        ServiceClass::Builtin(kind)
    }
}

impl From<String> for ServiceClass {
    fn from(label: String) -> Self {
        match ServiceKind::from_label(&label) {
            Some(kind) => ServiceClass::Builtin(kind),
            None => ServiceClass::Custom(label),
        }
    }
}

impl From<&str> for ServiceClass {
    fn from(label: &str) -> Self {
        ServiceClass::from(label.to_string())
    }
}

impl From<ServiceClass> for String {
    fn from(class: ServiceClass) -> Self {
        match class {
            ServiceClass::Builtin(kind) => kind.as_str().to_string(),
            ServiceClass::Custom(name) => name,
        }
    }
}

impl FromStr for ServiceClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ServiceClass::from(s))
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceClass::Builtin(kind) => f.write_str(kind.as_str()),
            ServiceClass::Custom(name) => f.write_str(name),
        }
    }
}

/// Cargo type of a shipment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CargoType {
    #[default]
    Standard,
    Perishable,
    BiologicalNormal,
    BiologicalInfectious,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        for kind in ServiceKind::ALL {
            let expected = match kind {
                ServiceKind::TrackedVehicle | ServiceKind::DoorToDoorInterior => 100.0,
                _ => 10.0,
            };
            assert_eq!(kind.weight_threshold_kg(), expected, "{kind}");
        }
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(
            ServiceClass::from("Door-To-Door Interior"),
            ServiceClass::Builtin(ServiceKind::DoorToDoorInterior)
        );
        assert_eq!(
            ServiceClass::from(" RESHIPMENT "),
            ServiceClass::Builtin(ServiceKind::Reshipment)
        );
        assert_eq!(
            ServiceClass::from("Cold Chain Express"),
            ServiceClass::Custom("Cold Chain Express".to_string())
        );
    }

    #[test]
    fn test_every_kind_parses_back() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_label(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ServiceClass::Builtin(ServiceKind::TrackedVehicle)).unwrap();
        assert_eq!(json, "\"tracked_vehicle\"");

        let custom: ServiceClass = serde_json::from_str("\"Hazmat\"").unwrap();
        assert_eq!(custom, ServiceClass::Custom("Hazmat".to_string()));
    }

    #[test]
    fn test_biological() {
        assert!(ServiceClass::from("biological_infectious").is_biological());
        assert!(!ServiceClass::from("standard").is_biological());
        assert!(!ServiceClass::from("bio").is_biological());
    }
}
