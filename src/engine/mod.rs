// ==========================================
// GLP 储罐计算系统 - 引擎层
// ==========================================
// 职责: 纯计算引擎, 无 I/O, 无共享状态
// 红线: 引擎对合法输入不返回错误, 每种边界情况都有明确回退值
// ==========================================

pub mod alerts;
pub mod consumption;
pub mod conversion;
pub mod inventory;
pub mod orchestrator;
pub mod projection;
pub mod report;
pub mod strategy;
pub mod truck;

// 重导出核心引擎
pub use consumption::ConsumptionEngine;
pub use conversion::{to_mass, to_volume, GRAMS_PER_KG};
pub use inventory::InventoryEngine;
pub use orchestrator::{CalculationInput, LpgCalculator};
pub use projection::TimeProjectionEngine;
pub use strategy::AdmissionPolicy;
pub use truck::TruckLogisticsEngine;
