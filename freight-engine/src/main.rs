use anyhow::Context;
use freight_engine::loader::{load_request, load_schedule};
use freight_engine::tariff::log_issues;
use freight_engine::{quote, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment();

    tracing::info!(
        schedule = %config.schedule_path,
        request = %config.request_path,
        "Freight engine starting"
    );

    // 2. 加载运费表和请求
    let schedule = load_schedule(&config.schedule_path)
        .with_context(|| format!("loading schedule {}", config.schedule_path))?;
    let request = load_request(&config.request_path)
        .with_context(|| format!("loading request {}", config.request_path))?;

    // 3. 校验运费表 (不阻断计费)
    if let Err(e) = schedule.validate() {
        tracing::warn!("Tariff schedule has configuration errors: {}", e);
    }

    // 4. 计费并输出
    let result = quote(&schedule, &request, &config.engine);
    log_issues(&schedule, &request, &result);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
