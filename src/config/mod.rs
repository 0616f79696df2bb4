// ==========================================
// GLP 储罐计算系统 - 配置层
// ==========================================
// 职责: 工厂配置 (储罐/密度/格式表/产速/槽车), 支持文件加载与键值覆写
// 存储: JSON 文件 (可选), 缺省使用内置默认值
// ==========================================

pub mod config_manager;
pub mod error;
pub mod plant_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager, ENV_PREFIX};
pub use error::{ConfigError, ConfigResult};
pub use plant_config::{FieldSource, LineSpec, PlantConfig, TankSpec, Tunable};
