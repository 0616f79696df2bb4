// ==========================================
// GLP 储罐计算系统 - 配置管理器
// ==========================================
// 职责: 配置加载 (JSON 文件/字符串)、快照、键值覆写
// 覆写来源: 调用方提供的 key/value, 或 LPG_TANK_CALC_* 环境变量
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::plant_config::PlantConfig;
use crate::engine::strategy::AdmissionPolicy;
use std::collections::BTreeMap;
use std::path::Path;

/// 环境变量覆写前缀, 例如 LPG_TANK_CALC_DENSITY_KG_PER_M3=0.55
pub const ENV_PREFIX: &str = "LPG_TANK_CALC_";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PlantConfig,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例 (会校验配置)
    pub fn new(config: PlantConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: PlantConfig = serde_json::from_str(raw)?;
        Self::new(config)
    }

    /// 从 JSON 文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "加载工厂配置");
        Self::from_json_str(&raw)
    }

    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    pub fn into_config(self) -> PlantConfig {
        self.config
    }

    /// 获取配置快照 (JSON)
    ///
    /// 可通过 from_json_str 原样恢复
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }

    /// 应用键值覆写
    ///
    /// # 返回
    /// - Ok(usize): 实际生效的覆写条数
    /// - Err: 值格式错误, 或覆写后配置校验失败 (此时配置保持不变)
    ///
    /// # 注意
    /// - 未知键记录 warn 后跳过
    /// - 百分比键 (`*_pct`) 以 0-100 表示
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) -> ConfigResult<usize> {
        let mut next = self.config.clone();
        let mut count = 0;

        for (key, value) in overrides {
            let applied = match key.as_str() {
                config_keys::DENSITY_KG_PER_M3 => {
                    next.density_kg_per_m3.default = parse_f64(key, value)?;
                    true
                }
                config_keys::RESERVE_MIN_PCT => {
                    next.reserve_min_fraction = parse_f64(key, value)? / 100.0;
                    true
                }
                config_keys::SAFE_CEILING_PCT => {
                    next.safe_ceiling_fraction.default = parse_f64(key, value)? / 100.0;
                    true
                }
                config_keys::TRUCK_CAPACITY_KG => {
                    next.truck_capacity_kg.default = parse_f64(key, value)?;
                    true
                }
                config_keys::LINE_A_SPEED => {
                    next.line_a.speed.default = parse_f64(key, value)?;
                    true
                }
                config_keys::LINE_B_SPEED => {
                    next.line_b.speed.default = parse_f64(key, value)?;
                    true
                }
                config_keys::ADMISSION_POLICY => {
                    next.admission_policy = value.parse::<AdmissionPolicy>().map_err(|message| {
                        ConfigError::InvalidValue {
                            key: key.clone(),
                            value: value.clone(),
                            message,
                        }
                    })?;
                    true
                }
                _ => {
                    tracing::warn!(config_key = %key, "未知配置键, 已跳过");
                    false
                }
            };
            if applied {
                count += 1;
            }
        }

        next.validate()?;
        self.config = next;
        Ok(count)
    }

    /// 收集 LPG_TANK_CALC_* 环境变量作为覆写 (键名转为小写)
    pub fn overrides_from_env() -> BTreeMap<String, String> {
        Self::overrides_from_vars(std::env::vars())
    }

    fn overrides_from_vars(
        vars: impl Iterator<Item = (String, String)>,
    ) -> BTreeMap<String, String> {
        vars.filter_map(|(name, value)| {
            let key = name.strip_prefix(ENV_PREFIX)?.to_lowercase();
            // CONFIG / LOG_JSON 属于进程启动参数, 不作为覆写键
            (key != "config" && key != "log_json").then_some((key, value))
        })
        .collect()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: PlantConfig::default(),
        }
    }
}

fn parse_f64(key: &str, value: &str) -> ConfigResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: "需要有限数值".to_string(),
        })
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 物性
    pub const DENSITY_KG_PER_M3: &str = "density_kg_per_m3";

    // 储备与安全上限 (百分比 0-100)
    pub const RESERVE_MIN_PCT: &str = "reserve_min_pct";
    pub const SAFE_CEILING_PCT: &str = "safe_ceiling_pct";

    // 槽车
    pub const TRUCK_CAPACITY_KG: &str = "truck_capacity_kg";
    pub const ADMISSION_POLICY: &str = "admission_policy";

    // 产速 (件/min)
    pub const LINE_A_SPEED: &str = "line_a_speed";
    pub const LINE_B_SPEED: &str = "line_b_speed";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_from_vars() {
        let vars = vec![
            ("LPG_TANK_CALC_DENSITY_KG_PER_M3".to_string(), "0.55".to_string()),
            ("LPG_TANK_CALC_CONFIG".to_string(), "/tmp/plant.json".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let overrides = ConfigManager::overrides_from_vars(vars.into_iter());
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("density_kg_per_m3").map(String::as_str), Some("0.55"));
    }

    #[test]
    fn test_parse_f64_rejects_garbage() {
        assert!(parse_f64("density_kg_per_m3", "abc").is_err());
        assert!(parse_f64("density_kg_per_m3", "NaN").is_err());
        assert_eq!(parse_f64("density_kg_per_m3", " 0.5 ").unwrap(), 0.5);
    }
}
