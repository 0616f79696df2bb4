// ==========================================
// GLP 储罐计算系统 - 计算编排器
// ==========================================
// 职责: 串联各引擎, 产出完整计算结果
// 流程: 库存 → {消耗 → 剩余时间} 与 {槽车收货}
// ==========================================
// 红线: 纯函数, 无共享状态; 相同输入得到逐位相同输出
// ==========================================

use crate::domain::line::LineConfiguration;
use crate::domain::result::CalculationResult;
use crate::domain::tank::Tank;
use crate::engine::alerts::low_level_alerts;
use crate::engine::consumption::ConsumptionEngine;
use crate::engine::inventory::InventoryEngine;
use crate::engine::projection::TimeProjectionEngine;
use crate::engine::strategy::AdmissionPolicy;
use crate::engine::truck::TruckLogisticsEngine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 单次计算的全部输入 (已校验)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub tanks: Vec<Tank>,
    pub density_kg_per_m3: f64,
    pub reserve_threshold: f64,
    pub safe_ceiling_fraction: f64,
    pub lines: LineConfiguration,
    pub truck_capacity_kg: f64,
    pub admission_policy: AdmissionPolicy,
}

// ==========================================
// LpgCalculator - 计算编排器
// ==========================================
pub struct LpgCalculator {
    inventory: InventoryEngine,
    consumption: ConsumptionEngine,
    projection: TimeProjectionEngine,
    truck: TruckLogisticsEngine,
}

impl LpgCalculator {
    pub fn new() -> Self {
        Self {
            inventory: InventoryEngine::new(),
            consumption: ConsumptionEngine::new(),
            projection: TimeProjectionEngine::new(),
            truck: TruckLogisticsEngine::new(),
        }
    }

    /// 执行一次完整计算
    ///
    /// 输入须已通过校验 (见 api::validator), 本方法对任何合法输入都不会失败
    #[instrument(skip(self, input), fields(
        tanks = input.tanks.len(),
        selection = %input.lines.selection,
        policy = %input.admission_policy
    ))]
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        // 1. 库存
        let inventory = self.inventory.summarize(
            &input.tanks,
            input.density_kg_per_m3,
            input.reserve_threshold,
            input.safe_ceiling_fraction,
        );

        // 2. 消耗 + 剩余时间
        let consumption = self.consumption.summarize(&input.lines);
        let remaining = self
            .projection
            .project(inventory.usable_mass_kg, consumption.total_rate_kg_per_min);

        // 3. 槽车
        let truck = self.truck.assess(
            input.admission_policy,
            &input.tanks,
            input.density_kg_per_m3,
            &inventory,
            input.truck_capacity_kg,
            consumption.total_rate_kg_per_min,
        );

        // 4. 单罐告警
        let alerts = low_level_alerts(&input.tanks, input.reserve_threshold);

        tracing::info!(
            usable_mass_kg = inventory.usable_mass_kg,
            total_rate_kg_per_min = consumption.total_rate_kg_per_min,
            remaining_status = %remaining.status,
            truck_admitted = truck.is_admitted(),
            "计算完成"
        );

        CalculationResult {
            inventory,
            consumption,
            remaining,
            truck,
            alerts,
        }
    }
}

impl Default for LpgCalculator {
    fn default() -> Self {
        Self::new()
    }
}
