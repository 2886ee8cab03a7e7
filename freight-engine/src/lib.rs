//! Freight Engine - client tariff based freight calculation
//!
//! # 模块结构
//!
//! ```text
//! freight-engine/src/
//! ├── core/          # 引擎配置
//! ├── tariff/        # 计费流水线 (rate → surcharge → weight → adjustments)
//! ├── registry.rs    # 客户运费表快照
//! ├── loader.rs      # JSON 加载
//! └── utils/         # 日志
//! ```
//!
//! # Example
//!
//! ```
//! use freight_engine::compute_freight;
//! use shared::models::{FreightRequest, RateSpec, ServiceKind, TariffSchedule};
//!
//! let schedule = TariffSchedule::new().with_rate(ServiceKind::Standard, RateSpec::new(50.0, 2.0));
//! let request = FreightRequest::new(ServiceKind::Standard, 15.0);
//!
//! assert_eq!(compute_freight(&schedule, &request), 60.0);
//! ```

pub mod core;
pub mod loader;
pub mod registry;
pub mod tariff;
pub mod utils;

// Re-export 公共类型
pub use self::core::{AppConfig, EngineConfig};
pub use registry::ScheduleRegistry;
pub use tariff::{FreightBreakdown, FreightQuote, QuoteStatus, compute_freight, quote};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> AppConfig {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
