//! Schedule Registry
//!
//! Per-client tariff schedules held as immutable snapshots. Replacing a
//! schedule swaps the `Arc`; calculations already holding the previous
//! snapshot finish against it.

use crate::core::EngineConfig;
use crate::tariff::{FreightQuote, log_issues, quote};
use dashmap::DashMap;
use shared::error::{TariffError, TariffResult};
use shared::models::{FreightRequest, TariffSchedule};
use std::sync::Arc;

/// Concurrent client_id → schedule map
#[derive(Debug, Default)]
pub struct ScheduleRegistry {
    schedules: DashMap<String, Arc<TariffSchedule>>,
    config: EngineConfig,
}

impl ScheduleRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            schedules: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and install a schedule, replacing any previous one.
    ///
    /// Returns the previous snapshot, if any.
    pub fn upsert(
        &self,
        client_id: impl Into<String>,
        schedule: TariffSchedule,
    ) -> TariffResult<Option<Arc<TariffSchedule>>> {
        let client_id = client_id.into();
        if let Err(e) = schedule.validate() {
            tracing::warn!(client = %client_id, "Rejected tariff schedule: {}", e);
            return Err(e);
        }

        let previous = self.schedules.insert(client_id.clone(), Arc::new(schedule));
        tracing::info!(
            client = %client_id,
            replaced = previous.is_some(),
            "Tariff schedule installed"
        );
        Ok(previous)
    }

    /// Current snapshot for a client
    pub fn snapshot(&self, client_id: &str) -> Option<Arc<TariffSchedule>> {
        self.schedules.get(client_id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, client_id: &str) -> Option<Arc<TariffSchedule>> {
        let removed = self.schedules.remove(client_id).map(|(_, schedule)| schedule);
        if removed.is_some() {
            tracing::info!(client = %client_id, "Tariff schedule removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Quote a request against the client's current snapshot
    pub fn quote(&self, client_id: &str, request: &FreightRequest) -> TariffResult<FreightQuote> {
        let schedule = self
            .snapshot(client_id)
            .ok_or_else(|| TariffError::UnknownClient(client_id.to_string()))?;

        let result = quote(&schedule, request, &self.config);
        log_issues(&schedule, request, &result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RateSpec, ServiceKind};

    fn schedule(base: f64) -> TariffSchedule {
        TariffSchedule::new().with_rate(ServiceKind::Standard, RateSpec::new(base, 2.0))
    }

    #[test]
    fn test_upsert_and_quote() {
        let registry = ScheduleRegistry::default();
        assert!(registry.is_empty());

        let previous = registry.upsert("acme", schedule(50.0)).unwrap();
        assert!(previous.is_none());
        assert_eq!(registry.len(), 1);

        let result = registry
            .quote("acme", &FreightRequest::new(ServiceKind::Standard, 15.0))
            .unwrap();
        assert_eq!(result.amount, 60.0);
    }

    #[test]
    fn test_unknown_client() {
        let registry = ScheduleRegistry::default();
        let err = registry
            .quote("nobody", &FreightRequest::new(ServiceKind::Standard, 1.0))
            .unwrap_err();
        assert!(matches!(err, TariffError::UnknownClient(ref id) if id == "nobody"));
    }

    #[test]
    fn test_invalid_schedule_is_rejected() {
        let registry = ScheduleRegistry::default();
        registry.upsert("acme", schedule(50.0)).unwrap();

        let result = registry.upsert("acme", schedule(-1.0));
        assert!(matches!(result, Err(TariffError::InvalidSchedule { .. })));

        // previous schedule remains
        assert_eq!(
            registry.snapshot("acme").unwrap().rate(ServiceKind::Standard),
            Some(&RateSpec::new(50.0, 2.0))
        );
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let registry = ScheduleRegistry::default();
        registry.upsert("acme", schedule(50.0)).unwrap();

        let held = registry.snapshot("acme").unwrap();
        let previous = registry.upsert("acme", schedule(70.0)).unwrap();

        assert!(Arc::ptr_eq(&held, &previous.unwrap()));
        let request = FreightRequest::new(ServiceKind::Standard, 5.0);
        assert_eq!(quote(&held, &request, registry.config()).amount, 50.0);
        assert_eq!(registry.quote("acme", &request).unwrap().amount, 70.0);
    }

    #[test]
    fn test_remove() {
        let registry = ScheduleRegistry::default();
        registry.upsert("acme", schedule(50.0)).unwrap();

        assert!(registry.remove("acme").is_some());
        assert!(registry.remove("acme").is_none());
        assert!(registry.snapshot("acme").is_none());
    }
}
