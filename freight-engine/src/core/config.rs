/// 计费引擎配置 - 不随客户变化的计算参数
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PERISHABLE_MULTIPLIER | 1.2 | 易腐货物系数 |
/// | RESHIPMENT_FALLBACK_RATE | 0.01 | 转运费率缺失时的兜底费率 (`none` 关闭) |
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// 易腐货物系数 (生物类服务不适用)
    pub perishable_multiplier: f64,
    /// 转运服务发票百分比的兜底值；None 表示不兜底
    pub reshipment_fallback_rate: Option<f64>,
}

/// 默认易腐货物系数
pub const DEFAULT_PERISHABLE_MULTIPLIER: f64 = 1.2;

/// 默认转运兜底费率 (1%)
pub const DEFAULT_RESHIPMENT_FALLBACK_RATE: f64 = 0.01;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            perishable_multiplier: DEFAULT_PERISHABLE_MULTIPLIER,
            reshipment_fallback_rate: Some(DEFAULT_RESHIPMENT_FALLBACK_RATE),
        }
    }
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PERISHABLE_MULTIPLIER").ok().as_deref(),
            std::env::var("RESHIPMENT_FALLBACK_RATE").ok().as_deref(),
        )
    }

    fn from_vars(perishable: Option<&str>, fallback: Option<&str>) -> Self {
        let perishable_multiplier = perishable
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(DEFAULT_PERISHABLE_MULTIPLIER);

        let reshipment_fallback_rate = match fallback.map(str::trim) {
            None => Some(DEFAULT_RESHIPMENT_FALLBACK_RATE),
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case("none") => None,
            Some(v) => Some(
                v.parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite() && *r >= 0.0)
                    .unwrap_or(DEFAULT_RESHIPMENT_FALLBACK_RATE),
            ),
        };

        Self {
            perishable_multiplier,
            reshipment_fallback_rate,
        }
    }

    /// 关闭转运兜底费率
    ///
    /// 常用于测试场景
    pub fn without_reshipment_fallback(mut self) -> Self {
        self.reshipment_fallback_rate = None;
        self
    }
}

/// 命令行程序配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | SCHEDULE_PATH | tariff.json | 运费表文件 |
/// | REQUEST_PATH | request.json | 计费请求文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时按天滚动写文件 |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub schedule_path: String,
    pub request_path: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub engine: EngineConfig,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            schedule_path: std::env::var("SCHEDULE_PATH").unwrap_or_else(|_| "tariff.json".into()),
            request_path: std::env::var("REQUEST_PATH").unwrap_or_else(|_| "request.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            engine: EngineConfig::from_env(),
        }
    }
}
