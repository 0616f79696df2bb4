// ==========================================
// GLP 储罐计算系统 - 计算结果模型
// ==========================================
// 职责: 计算输出的完整结果包, 供展示层格式化
// 红线: 三种零值状态 (无可用库存 / 未配置消耗 / 超出安全上限) 必须可区分
// ==========================================

use crate::domain::types::{LineId, RemainingTimeStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// 库存
// ==========================================

/// 单罐库存快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSnapshot {
    pub name: String,
    pub capacity_m3: f64,
    pub fill_percent: f64,
    pub current_volume_m3: f64,
    pub current_mass_kg: f64,
    pub capacity_mass_kg: f64, // 100% 物理上限对应质量
}

/// 汇总库存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub tanks: Vec<TankSnapshot>,
    pub total_current_mass_kg: f64,
    pub minimum_required_mass_kg: f64,
    pub usable_mass_kg: f64,
    pub physical_capacity_mass_kg: f64,
    pub safe_ceiling_mass_kg: f64,
}

// ==========================================
// 消耗
// ==========================================

/// 单条生产线消耗明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConsumption {
    pub line: LineId,
    pub format_name: String,
    pub grams_per_unit: f64,
    pub throughput_per_min: f64,
    pub efficiency: f64,
    pub rate_kg_per_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSummary {
    /// 仅包含已激活且已选格式的生产线
    pub lines: Vec<LineConsumption>,
    pub total_rate_kg_per_min: f64,
}

impl ConsumptionSummary {
    pub fn is_configured(&self) -> bool {
        self.total_rate_kg_per_min > 0.0
    }
}

// ==========================================
// 剩余运行时间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub status: RemainingTimeStatus,
    /// 连续分钟数 (零值状态下为 0.0)
    pub minutes: f64,
    pub hours: u64,
    pub remainder_minutes: u64,
    /// 保留两位小数的分钟数
    pub rounded_minutes: f64,
}

// ==========================================
// 槽车收货 - 策略 A: 充满至 100%
// ==========================================

/// 收货后单罐液位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankAfterDelivery {
    pub name: String,
    pub added_kg: f64,
    pub mass_kg: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryDistribution {
    FillsCompletely, // 槽车足以将所有储罐充满
    Proportional,    // 按缺口比例分配
    NotApplicable,   // 总缺口为 0, 无需分配
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillToFullOutcome {
    pub truck_capacity_kg: f64,
    pub physical_capacity_mass_kg: f64,
    pub needed_to_full_kg: f64,
    pub can_fill_fully: bool,
    pub distribution: DeliveryDistribution,
    pub tanks: Vec<TankAfterDelivery>,
}

// ==========================================
// 槽车收货 - 策略 B: 安全上限
// ==========================================

/// 等待消耗腾出空间所需时间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaitEstimate {
    Minutes(f64),
    /// 当前无消耗, 等待时间无界
    Unbounded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafeCeilingOutcome {
    /// 当前库存已超过安全上限
    Overfill { excess_kg: f64 },
    /// 空间不足, 需等待
    Shortfall {
        shortfall_kg: f64,
        wait: WaitEstimate,
    },
    /// 可以卸车
    Admit { headroom_kg: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeCeilingAssessment {
    pub truck_capacity_kg: f64,
    pub safe_ceiling_mass_kg: f64,
    pub space_for_truck_kg: f64,
    pub can_offload: bool,
    pub outcome: SafeCeilingOutcome,
}

// ==========================================
// 槽车收货 - 汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TruckAssessment {
    FillToFull(FillToFullOutcome),
    SafeCeiling(SafeCeilingAssessment),
}

impl TruckAssessment {
    /// 整车载量能否按当前策略全部收下
    ///
    /// 策略 A 以 can_fill_fully 为准 (按比例分配不算收下), 策略 B 以 can_offload 为准
    pub fn is_admitted(&self) -> bool {
        match self {
            TruckAssessment::FillToFull(outcome) => outcome.can_fill_fully,
            TruckAssessment::SafeCeiling(assessment) => assessment.can_offload,
        }
    }
}

// ==========================================
// 告警
// ==========================================

/// 单罐液位处于或低于储备下限
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankAlert {
    pub name: String,
    pub fill_percent: f64,
    pub reserve_percent: f64,
}

// ==========================================
// CalculationResult - 完整结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub inventory: InventorySummary,
    pub consumption: ConsumptionSummary,
    pub remaining: RemainingTime,
    pub truck: TruckAssessment,
    pub alerts: Vec<TankAlert>,
}
