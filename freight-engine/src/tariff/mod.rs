//! Freight Tariff Module
//!
//! Turns a shipment's weight, declared value, service class and origin city
//! into a freight amount under a client's tariff schedule. Pure and
//! synchronous; safe to call from any number of threads on a shared
//! schedule.

pub mod adjustment;
mod calculator;
pub mod money;
pub mod resolver;
pub mod surcharge;
pub mod weight;


pub use adjustment::{Adjustment, AdjustmentParams, STANDARD_ORDER, apply_adjustments, apply_adjustments_in};
pub use calculator::*;
pub use resolver::{RateExtra, ResolvedRate, resolve};
pub use surcharge::special_surcharge;
pub use weight::{WeightCharge, weight_charge};
