// ==========================================
// GLP 储罐计算系统 - 领域模型层
// ==========================================
// 职责: 定义储罐、生产线、计算结果等实体与类型
// 红线: 不含计算逻辑, 实体构造后不再修改
// ==========================================

pub mod line;
pub mod result;
pub mod tank;
pub mod types;

// 重导出核心类型
pub use line::{Format, LineConfiguration, LineSetup};
pub use result::{
    CalculationResult, ConsumptionSummary, DeliveryDistribution, FillToFullOutcome,
    InventorySummary, LineConsumption, RemainingTime, SafeCeilingAssessment, SafeCeilingOutcome,
    TankAfterDelivery, TankAlert, TankSnapshot, TruckAssessment, WaitEstimate,
};
pub use tank::Tank;
pub use types::{LineId, LineSelection, RemainingTimeStatus};
