// ==========================================
// GLP 储罐计算系统 - 核心库
// ==========================================
// 系统定位: 决策支持 (储罐库存 / 剩余运行时间 / 槽车收货)
// 计算性质: 无状态纯函数, 每次调用基于一份输入快照
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 工厂配置
pub mod config;

// API 层 - 校验与计算入口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{LineId, LineSelection, RemainingTimeStatus};

// 领域实体
pub use domain::{
    CalculationResult, Format, LineConfiguration, LineSetup, SafeCeilingOutcome, Tank,
    TruckAssessment, WaitEstimate,
};

// 引擎
pub use engine::{
    AdmissionPolicy, CalculationInput, ConsumptionEngine, InventoryEngine, LpgCalculator,
    TimeProjectionEngine, TruckLogisticsEngine,
};

// 配置
pub use config::{ConfigManager, PlantConfig};

// API
pub use api::{ApiError, ApiResult, CalculationRequest, CalculatorApi, ValidationMode};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "GLP 储罐计算系统";
