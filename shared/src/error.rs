//! Error types for tariff configuration handling
//!
//! The pricing pipeline itself never returns these: it degrades and
//! reports [`ConfigIssue`](crate::models::ConfigIssue)s instead. Errors
//! cover the edges around it (loading, validation, registry lookups).

use std::path::PathBuf;
use thiserror::Error;

/// Tariff error types
#[derive(Debug, Error)]
pub enum TariffError {
    /// File could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be decoded
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// Schedule failed validation
    #[error("Invalid schedule: {field} {reason}")]
    InvalidSchedule { field: String, reason: String },

    /// No schedule registered for the client
    #[error("No tariff schedule for client: {0}")]
    UnknownClient(String),
}

impl TariffError {
    pub fn invalid_schedule(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for tariff operations
pub type TariffResult<T> = Result<T, TariffError>;
