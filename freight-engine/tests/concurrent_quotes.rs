//! 并发计费测试 - 多线程共享运费表快照
//!
//! 管理员替换运费表时，进行中的计费继续使用旧快照

use freight_engine::{EngineConfig, ScheduleRegistry, quote};
use rand::Rng;
use shared::models::{CargoType, FreightRequest, OriginCity, RateSpec, ServiceKind, TariffSchedule};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const QUOTES_PER_THREAD: usize = 500;

fn full_schedule(base: f64) -> TariffSchedule {
    ServiceKind::ALL
        .into_iter()
        .fold(TariffSchedule::new(), |s, kind| {
            let spec = match kind {
                ServiceKind::DoorToDoorInterior => RateSpec::new(base, 1.5).with_distance_rate(2.5),
                ServiceKind::Reshipment => RateSpec::new(base, 1.0).with_invoice_percentage(0.01),
                _ => RateSpec::new(base, 2.0),
            };
            s.with_rate(kind, spec)
        })
        .with_insurance_rate(0.01)
        .with_multiplier(1.1)
        .with_discount_percent(5.0)
}

/// 生成随机请求
fn random_request(rng: &mut impl Rng) -> FreightRequest {
    const CARGO: [CargoType; 4] = [
        CargoType::Standard,
        CargoType::Perishable,
        CargoType::BiologicalNormal,
        CargoType::BiologicalInfectious,
    ];

    let kind = ServiceKind::ALL[rng.gen_range(0..ServiceKind::ALL.len())];
    let mut request = FreightRequest::new(kind, rng.gen_range(0.0..500.0))
        .with_cargo_type(CARGO[rng.gen_range(0..CARGO.len())])
        .with_declared_value(if rng.gen_bool(0.5) { rng.gen_range(0.0..50_000.0) } else { 0.0 });
    if rng.gen_bool(0.7) {
        request = request.with_origin_city(OriginCity::new("Interior", rng.gen_range(0.0..900.0)));
    }
    request
}

#[test]
fn random_requests_are_non_negative_and_idempotent() {
    let schedule = full_schedule(50.0);
    let config = EngineConfig::default();
    let mut rng = rand::thread_rng();

    for _ in 0..2000 {
        let request = random_request(&mut rng);
        let first = quote(&schedule, &request, &config);
        let second = quote(&schedule, &request, &config);

        assert!(first.amount >= 0.0, "{request:?} → {}", first.amount);
        assert_eq!(first.amount.to_bits(), second.amount.to_bits());
        // amounts carry at most 2 decimals
        assert!(((first.amount * 100.0).round() - first.amount * 100.0).abs() < 1e-6);
    }
}

#[test]
fn concurrent_quotes_share_one_schedule() {
    let schedule = Arc::new(full_schedule(50.0));
    let config = Arc::new(EngineConfig::default());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let schedule = Arc::clone(&schedule);
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                (0..QUOTES_PER_THREAD)
                    .map(|_| {
                        let request = random_request(&mut rng);
                        let amount = quote(&schedule, &request, &config).amount;
                        (request, amount)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (request, amount) in handle.join().expect("worker panicked") {
            assert_eq!(quote(&schedule, &request, &config).amount, amount);
        }
    }
}

#[test]
fn snapshots_isolate_in_flight_quotes_from_edits() {
    let registry = Arc::new(ScheduleRegistry::new(EngineConfig::default()));
    registry.upsert("acme", full_schedule(50.0)).unwrap();

    let request = FreightRequest::new(ServiceKind::Standard, 5.0);
    // 50 × 1.1 = 55, − 2.75 = 52.25
    let old_amount = 52.25;
    // 80 × 1.1 = 88, − 4.4 = 83.6
    let new_amount = 83.6;

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..200 {
                let base = if i % 2 == 0 { 80.0 } else { 50.0 };
                registry.upsert("acme", full_schedule(base)).unwrap();
            }
            registry.upsert("acme", full_schedule(80.0)).unwrap();
        })
    };

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let request = request.clone();
            thread::spawn(move || {
                for _ in 0..QUOTES_PER_THREAD {
                    let snapshot = registry.snapshot("acme").expect("schedule installed");
                    let config = registry.config().clone();
                    let first = quote(&snapshot, &request, &config).amount;
                    let second = quote(&snapshot, &request, &config).amount;
                    // a held snapshot never changes under the caller
                    assert_eq!(first, second);
                    assert!(first == old_amount || first == new_amount, "got {first}");
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    assert_eq!(registry.quote("acme", &request).unwrap().amount, new_amount);
}
