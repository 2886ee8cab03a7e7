//! 运费表文件加载 - 从 JSON 文件到报价的完整流程

use freight_engine::loader::{load_request, load_schedule};
use freight_engine::{EngineConfig, QuoteStatus, quote};
use shared::error::TariffError;
use shared::models::{ConfigIssue, ServiceClass, ServiceKind};
use std::fs;
use tempfile::TempDir;

const SCHEDULE_JSON: &str = r#"{
    "clientId": "acme-logistics",
    "rates": {
        "standard": { "baseRate": 50, "excessRate": 2 },
        "door_to_door_interior": { "baseRate": 200, "excessRate": 1.5, "distanceRatePerKm": 2.5 },
        "reshipment": { "baseRate": 30, "excessRate": 1, "invoicePercentageRate": 0.01 }
    },
    "insuranceRate": 0.01,
    "multiplier": 1.1,
    "defaultDiscountPercent": 10,
    "customServices": [
        { "name": "Cold Chain", "baseRate": 80, "excessRate": 3, "minWeight": 25 }
    ]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn quote_from_files() {
    let dir = TempDir::new().unwrap();
    let schedule_path = write(&dir, "tariff.json", SCHEDULE_JSON);
    let request_path = write(
        &dir,
        "request.json",
        r#"{ "weightKg": 15, "serviceClass": "standard", "cargoType": "perishable", "declaredValue": 1000 }"#,
    );

    let schedule = load_schedule(&schedule_path).unwrap();
    let request = load_request(&request_path).unwrap();
    assert!(schedule.validate().is_ok());

    // (50 + 10) × 1.2 = 72, + 10 insurance = 82, × 1.1 = 90.2, − 9.02 = 81.18
    let result = quote(&schedule, &request, &EngineConfig::default());
    assert_eq!(result.amount, 81.18);
    assert_eq!(result.status, QuoteStatus::Computed);
}

#[test]
fn custom_service_from_files() {
    let dir = TempDir::new().unwrap();
    let schedule = load_schedule(write(&dir, "tariff.json", SCHEDULE_JSON)).unwrap();
    let request = load_request(write(
        &dir,
        "request.json",
        r#"{ "weightKg": 30, "serviceClass": "COLD CHAIN" }"#,
    ))
    .unwrap();

    assert_eq!(request.service_class, ServiceClass::Custom("COLD CHAIN".to_string()));

    // 80 + 5 × 3 = 95, × 1.1 = 104.5, − 10.45 = 94.05
    let result = quote(&schedule, &request, &EngineConfig::default());
    assert_eq!(result.amount, 94.05);
}

#[test]
fn door_to_door_without_city_from_files() {
    let dir = TempDir::new().unwrap();
    let schedule = load_schedule(write(&dir, "tariff.json", SCHEDULE_JSON)).unwrap();
    let request = load_request(write(
        &dir,
        "request.json",
        r#"{ "weightKg": 80, "serviceClass": "door-to-door interior" }"#,
    ))
    .unwrap();

    assert_eq!(request.service_class, ServiceClass::Builtin(ServiceKind::DoorToDoorInterior));

    // 200 × 1.1 = 220, − 22 = 198
    let result = quote(&schedule, &request, &EngineConfig::default());
    assert_eq!(result.amount, 198.0);
    assert_eq!(result.status, QuoteStatus::Degraded);
    assert!(matches!(result.issues[..], [ConfigIssue::MissingOriginCity { .. }]));
}

#[test]
fn quote_serializes_with_issues() {
    let dir = TempDir::new().unwrap();
    let schedule = load_schedule(write(&dir, "tariff.json", SCHEDULE_JSON)).unwrap();
    let request = load_request(write(
        &dir,
        "request.json",
        r#"{ "weightKg": 3, "serviceClass": "hovercraft" }"#,
    ))
    .unwrap();

    let result = quote(&schedule, &request, &EngineConfig::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["amount"], 0.0);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["issues"][0]["kind"], "unknown_service");
    assert_eq!(json["issues"][0]["name"], "hovercraft");
    assert!(json["breakdown"]["baseRate"].is_number());
}

#[test]
fn malformed_schedule_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tariff.json", r#"{ "rates": { "warp_drive": { "baseRate": 1 } } }"#);

    let err = load_schedule(&path).unwrap_err();
    assert!(matches!(err, TariffError::Parse { .. }));
    assert!(err.to_string().contains("tariff.json"));
}
