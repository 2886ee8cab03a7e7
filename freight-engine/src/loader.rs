//! JSON loaders for tariff schedules and freight requests

use serde::de::DeserializeOwned;
use shared::error::{TariffError, TariffResult};
use shared::models::{FreightRequest, TariffSchedule};
use std::path::Path;

const INLINE_SOURCE: &str = "<inline>";

pub fn load_schedule(path: impl AsRef<Path>) -> TariffResult<TariffSchedule> {
    load_json(path.as_ref())
}

pub fn load_request(path: impl AsRef<Path>) -> TariffResult<FreightRequest> {
    load_json(path.as_ref())
}

pub fn parse_schedule(json: &str) -> TariffResult<TariffSchedule> {
    parse_json(json, INLINE_SOURCE)
}

pub fn parse_request(json: &str) -> TariffResult<FreightRequest> {
    parse_json(json, INLINE_SOURCE)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> TariffResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| TariffError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded JSON file");
    parse_json(&content, &path.display().to_string())
}

fn parse_json<T: DeserializeOwned>(json: &str, source: &str) -> TariffResult<T> {
    serde_json::from_str(json).map_err(|e| TariffError::Parse {
        path: source.to_string(),
        message: e.to_string(),
    })
}
