// ==========================================
// GLP 储罐计算系统 - 槽车收货引擎
// ==========================================
// 职责: 判断来车能否收货, 并给出收货后各罐液位
// 策略 A (FillToFull): 以 100% 物理上限为准, 不足时按缺口比例分配
// 策略 B (SafeCeiling): 以安全上限为准, 单次判定, 三种结果
// ==========================================
// 红线: 收货后单罐质量不得超过其 100% 物理上限
// 红线: 策略 B 的 "超出安全上限" 与 "空间不足" 是不同结果
// ==========================================

use crate::domain::result::{
    DeliveryDistribution, FillToFullOutcome, InventorySummary, SafeCeilingAssessment,
    SafeCeilingOutcome, TankAfterDelivery, TruckAssessment, WaitEstimate,
};
use crate::domain::tank::Tank;
use crate::engine::conversion::to_mass;
use crate::engine::inventory::InventoryEngine;
use crate::engine::strategy::AdmissionPolicy;

// ==========================================
// TruckLogisticsEngine - 槽车收货引擎
// ==========================================
pub struct TruckLogisticsEngine {
    inventory: InventoryEngine,
}

impl TruckLogisticsEngine {
    pub fn new() -> Self {
        Self {
            inventory: InventoryEngine::new(),
        }
    }

    /// 按选定策略评估来车
    ///
    /// # 参数
    /// - `policy`: 收货策略
    /// - `tanks`: 储罐快照
    /// - `density`: 密度 (kg/m³)
    /// - `inventory`: 已汇总的库存 (提供当前总量与安全上限)
    /// - `truck_capacity_kg`: 来车载量
    /// - `total_rate_kg_per_min`: 当前消耗速率 (策略 B 估算等待时间)
    pub fn assess(
        &self,
        policy: AdmissionPolicy,
        tanks: &[Tank],
        density: f64,
        inventory: &InventorySummary,
        truck_capacity_kg: f64,
        total_rate_kg_per_min: f64,
    ) -> TruckAssessment {
        match policy {
            AdmissionPolicy::FillToFull => TruckAssessment::FillToFull(self.fill_to_full(
                tanks,
                density,
                truck_capacity_kg,
            )),
            AdmissionPolicy::SafeCeiling => TruckAssessment::SafeCeiling(self.safe_ceiling(
                inventory.safe_ceiling_mass_kg,
                inventory.total_current_mass_kg,
                truck_capacity_kg,
                total_rate_kg_per_min,
            )),
        }
    }

    // ==========================================
    // 策略 A: 充满至 100%
    // ==========================================

    /// 充满判定与按比例分配
    ///
    /// 规则:
    /// 1) needed_to_full = max(0, 物理上限 - 当前总量)
    /// 2) 载量 >= needed_to_full → 所有储罐 100%
    /// 3) 否则单罐缺口 need_i = 单罐上限 - 单罐当前; 按 need_i / Σneed 分配载量
    /// 4) Σneed 为 0 时不分配, 液位保持不变
    /// 5) 分配后单罐质量截断至单罐上限 (防止浮点超出)
    pub fn fill_to_full(
        &self,
        tanks: &[Tank],
        density: f64,
        truck_capacity_kg: f64,
    ) -> FillToFullOutcome {
        let physical_capacity_mass_kg = self.inventory.physical_capacity_mass(tanks, density);
        let total_current_mass_kg = self.inventory.total_current_mass(tanks, density);
        let needed_to_full_kg = (physical_capacity_mass_kg - total_current_mass_kg).max(0.0);
        let can_fill_fully = truck_capacity_kg >= needed_to_full_kg;

        let (distribution, after) = if can_fill_fully {
            let after = tanks
                .iter()
                .map(|tank| {
                    let capacity_mass = to_mass(tank.capacity_m3, density);
                    TankAfterDelivery {
                        name: tank.name.clone(),
                        added_kg: capacity_mass - self.inventory.current_mass(tank, density),
                        mass_kg: capacity_mass,
                        percent: 100.0,
                    }
                })
                .collect();
            (DeliveryDistribution::FillsCompletely, after)
        } else {
            self.distribute_proportionally(tanks, density, truck_capacity_kg)
        };

        tracing::debug!(
            needed_to_full_kg,
            truck_capacity_kg,
            can_fill_fully,
            distribution = ?distribution,
            "策略A收货判定完成"
        );

        FillToFullOutcome {
            truck_capacity_kg,
            physical_capacity_mass_kg,
            needed_to_full_kg,
            can_fill_fully,
            distribution,
            tanks: after,
        }
    }

    fn distribute_proportionally(
        &self,
        tanks: &[Tank],
        density: f64,
        truck_capacity_kg: f64,
    ) -> (DeliveryDistribution, Vec<TankAfterDelivery>) {
        let needs: Vec<f64> = tanks
            .iter()
            .map(|tank| {
                to_mass(tank.capacity_m3, density) - self.inventory.current_mass(tank, density)
            })
            .collect();
        let total_need = needs.iter().sum::<f64>().max(0.0);

        if total_need <= 0.0 {
            let unchanged = tanks
                .iter()
                .map(|tank| {
                    let mass_kg = self.inventory.current_mass(tank, density);
                    TankAfterDelivery {
                        name: tank.name.clone(),
                        added_kg: 0.0,
                        mass_kg,
                        percent: Self::percent_of(mass_kg, to_mass(tank.capacity_m3, density)),
                    }
                })
                .collect();
            return (DeliveryDistribution::NotApplicable, unchanged);
        }

        let after = tanks
            .iter()
            .zip(needs.iter())
            .map(|(tank, need)| {
                let capacity_mass = to_mass(tank.capacity_m3, density);
                let current = self.inventory.current_mass(tank, density);
                let share = truck_capacity_kg * (need / total_need);
                let mass_kg = (current + share).min(capacity_mass);
                TankAfterDelivery {
                    name: tank.name.clone(),
                    added_kg: mass_kg - current,
                    mass_kg,
                    percent: Self::percent_of(mass_kg, capacity_mass),
                }
            })
            .collect();

        (DeliveryDistribution::Proportional, after)
    }

    /// 零容量储罐的百分比记为 0
    fn percent_of(mass_kg: f64, capacity_mass_kg: f64) -> f64 {
        if capacity_mass_kg <= 0.0 {
            return 0.0;
        }
        mass_kg / capacity_mass_kg * 100.0
    }

    // ==========================================
    // 策略 B: 安全上限
    // ==========================================

    /// 安全上限收货判定
    ///
    /// 规则:
    /// - space < 0 → Overfill (已超出安全上限)
    /// - 0 <= space < 载量 → Shortfall, 给出缺口与等待时间 (无消耗时等待无界)
    /// - space >= 载量 → Admit, 给出剩余余量
    ///
    /// 等待时间假设按当前速率持续消耗, 且期间无其他补给
    pub fn safe_ceiling(
        &self,
        safe_ceiling_mass_kg: f64,
        total_current_mass_kg: f64,
        truck_capacity_kg: f64,
        total_rate_kg_per_min: f64,
    ) -> SafeCeilingAssessment {
        let space_for_truck_kg = safe_ceiling_mass_kg - total_current_mass_kg;
        let can_offload = space_for_truck_kg >= truck_capacity_kg;

        let outcome = if space_for_truck_kg < 0.0 {
            tracing::warn!(
                excess_kg = -space_for_truck_kg,
                "当前库存已超出安全上限"
            );
            SafeCeilingOutcome::Overfill {
                excess_kg: -space_for_truck_kg,
            }
        } else if !can_offload {
            let shortfall_kg = truck_capacity_kg - space_for_truck_kg;
            let wait = if total_rate_kg_per_min > 0.0 {
                WaitEstimate::Minutes(shortfall_kg / total_rate_kg_per_min)
            } else {
                WaitEstimate::Unbounded
            };
            SafeCeilingOutcome::Shortfall { shortfall_kg, wait }
        } else {
            SafeCeilingOutcome::Admit {
                headroom_kg: space_for_truck_kg - truck_capacity_kg,
            }
        };

        tracing::debug!(
            space_for_truck_kg,
            truck_capacity_kg,
            can_offload,
            "策略B收货判定完成"
        );

        SafeCeilingAssessment {
            truck_capacity_kg,
            safe_ceiling_mass_kg,
            space_for_truck_kg,
            can_offload,
            outcome,
        }
    }
}

impl Default for TruckLogisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
