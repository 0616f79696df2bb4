// ==========================================
// GLP 储罐计算系统 - 命令行入口
// ==========================================
// 用法: lpg-tank-calc [plant.json] [request.json]
// - 配置: LPG_TANK_CALC_CONFIG / 第一个参数 / <config_dir>/lpg-tank-calc/plant.json / 内置默认
// - 请求: 第二个参数 (JSON), 缺省为默认请求
// ==========================================

use anyhow::Context;
use lpg_tank_calc::api::{CalculationRequest, CalculatorApi};
use lpg_tank_calc::config::ConfigManager;
use lpg_tank_calc::engine::report;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    lpg_tank_calc::logging::init();

    tracing::info!("{} v{}", lpg_tank_calc::APP_NAME, lpg_tank_calc::VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. 加载配置
    let mut manager = match resolve_config_path(args.first()) {
        Some(path) => ConfigManager::from_file(&path)
            .with_context(|| format!("无法加载配置: {}", path.display()))?,
        None => {
            tracing::info!("未找到配置文件, 使用内置默认配置");
            ConfigManager::default()
        }
    };

    let overrides = ConfigManager::overrides_from_env();
    if !overrides.is_empty() {
        let applied = manager.apply_overrides(&overrides).context("环境变量覆写失败")?;
        tracing::info!(applied, "已应用环境变量覆写");
    }

    // 2. 读取请求
    let request = match args.get(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取请求文件: {}", path))?;
            serde_json::from_str::<CalculationRequest>(&raw)
                .with_context(|| format!("请求文件格式错误: {}", path))?
        }
        None => CalculationRequest::default_for(manager.config()),
    };

    // 3. 计算
    let api = CalculatorApi::new(manager.into_config())?;
    let result = api.calculate(&request)?;

    for line in report::render_text(&result) {
        println!("{}", line);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// 配置文件路径: 环境变量 > 命令行参数 > 用户配置目录 (存在时)
fn resolve_config_path(arg: Option<&String>) -> Option<PathBuf> {
    if let Ok(path) = std::env::var("LPG_TANK_CALC_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    if let Some(path) = arg {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("lpg-tank-calc").join("plant.json"))
        .filter(|path| path.exists())
}
