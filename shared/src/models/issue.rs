//! Configuration Issue Model
//!
//! Gaps found while pricing a shipment. The calculation never fails on
//! them; they travel with the quote so callers can log or surface them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage names (used in overflow reports)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    SpecialSurcharge,
    WeightCharge,
    Perishable,
    Insurance,
    ScheduleMultiplier,
    ScheduleDiscount,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SpecialSurcharge => "special surcharge",
            Stage::WeightCharge => "weight charge",
            Stage::Perishable => "perishable multiplier",
            Stage::Insurance => "insurance surcharge",
            Stage::ScheduleMultiplier => "schedule multiplier",
            Stage::ScheduleDiscount => "schedule discount",
        };
        f.write_str(name)
    }
}

/// A configuration or input gap observed during a calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigIssue {
    /// No built-in rate and no custom service matched; zero rate used
    UnknownService { name: String },
    /// Built-in class has no rate entry in the schedule
    MissingRate { service: String },
    /// Distance-priced class requested without an origin city
    MissingOriginCity { service: String },
    /// Door-to-door class without a per-km rate
    MissingDistanceRate,
    /// Reshipment class without an invoice rate; engine fallback applied
    FallbackInvoicePercentage { rate: f64 },
    /// Reshipment class without an invoice rate and no fallback configured
    MissingInvoicePercentage,
    /// Negative or non-finite number replaced by zero
    InvalidInput { field: String, value: f64 },
    /// Decimal overflow; the quote degrades to zero
    ArithmeticOverflow { stage: Stage },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::UnknownService { name } => {
                write!(f, "service '{name}' is not configured, using zero rate")
            }
            ConfigIssue::MissingRate { service } => {
                write!(f, "no rate entry for service '{service}', using zero rate")
            }
            ConfigIssue::MissingOriginCity { service } => {
                write!(f, "service '{service}' needs an origin city, distance charge skipped")
            }
            ConfigIssue::MissingDistanceRate => {
                write!(f, "no per-km rate configured, distance charge skipped")
            }
            ConfigIssue::FallbackInvoicePercentage { rate } => {
                write!(f, "no invoice percentage configured, fallback rate {rate} applied")
            }
            ConfigIssue::MissingInvoicePercentage => {
                write!(f, "no invoice percentage configured, reshipment surcharge skipped")
            }
            ConfigIssue::InvalidInput { field, value } => {
                write!(f, "{field} must be a finite non-negative number, got {value}")
            }
            ConfigIssue::ArithmeticOverflow { stage } => {
                write!(f, "arithmetic overflow in {stage}, amount set to zero")
            }
        }
    }
}
