// ==========================================
// GLP 储罐计算系统 - 库存引擎
// ==========================================
// 职责: 单罐/汇总的当前质量、储备下限、可用量、物理上限、安全上限
// 输入: 储罐快照 + 密度 + 储备比例 + 安全上限比例
// 输出: InventorySummary
// ==========================================
// 注意: 储备下限按所有储罐的合计容积计算, 而不是逐罐计算。
// 一个接近空罐的储罐可以被另一个较满的储罐抵消。
// ==========================================

use crate::domain::result::{InventorySummary, TankSnapshot};
use crate::domain::tank::Tank;
use crate::engine::conversion::to_mass;

// ==========================================
// InventoryEngine - 库存引擎
// ==========================================
pub struct InventoryEngine {
    // 无状态引擎
}

impl InventoryEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 单罐当前质量 (kg)
    pub fn current_mass(&self, tank: &Tank, density: f64) -> f64 {
        to_mass(tank.capacity_m3 * tank.fill_fraction, density)
    }

    pub fn total_current_mass(&self, tanks: &[Tank], density: f64) -> f64 {
        tanks.iter().map(|t| self.current_mass(t, density)).sum()
    }

    /// 储备下限质量 (kg), 作用于合计容积
    pub fn minimum_required_mass(
        &self,
        tanks: &[Tank],
        reserve_threshold: f64,
        density: f64,
    ) -> f64 {
        to_mass(Self::total_capacity_m3(tanks) * reserve_threshold, density)
    }

    /// 储备下限以上的可用质量 (kg), 不小于 0
    pub fn usable_mass(&self, tanks: &[Tank], reserve_threshold: f64, density: f64) -> f64 {
        let usable = self.total_current_mass(tanks, density)
            - self.minimum_required_mass(tanks, reserve_threshold, density);
        usable.max(0.0)
    }

    /// 100% 物理上限质量 (kg)
    pub fn physical_capacity_mass(&self, tanks: &[Tank], density: f64) -> f64 {
        tanks.iter().map(|t| to_mass(t.capacity_m3, density)).sum()
    }

    /// 安全上限质量 (kg)
    ///
    /// 与 current_mass 相同的逐罐累加顺序: 充装率等于上限比例时两者逐位相等
    pub fn safe_ceiling_mass(
        &self,
        tanks: &[Tank],
        safe_ceiling_fraction: f64,
        density: f64,
    ) -> f64 {
        tanks
            .iter()
            .map(|t| to_mass(t.capacity_m3 * safe_ceiling_fraction, density))
            .sum()
    }

    /// 单罐快照
    pub fn snapshot(&self, tank: &Tank, density: f64) -> TankSnapshot {
        TankSnapshot {
            name: tank.name.clone(),
            capacity_m3: tank.capacity_m3,
            fill_percent: tank.fill_percent(),
            current_volume_m3: tank.current_volume_m3(),
            current_mass_kg: self.current_mass(tank, density),
            capacity_mass_kg: to_mass(tank.capacity_m3, density),
        }
    }

    /// 汇总库存
    pub fn summarize(
        &self,
        tanks: &[Tank],
        density: f64,
        reserve_threshold: f64,
        safe_ceiling_fraction: f64,
    ) -> InventorySummary {
        let summary = InventorySummary {
            tanks: tanks.iter().map(|t| self.snapshot(t, density)).collect(),
            total_current_mass_kg: self.total_current_mass(tanks, density),
            minimum_required_mass_kg: self.minimum_required_mass(tanks, reserve_threshold, density),
            usable_mass_kg: self.usable_mass(tanks, reserve_threshold, density),
            physical_capacity_mass_kg: self.physical_capacity_mass(tanks, density),
            safe_ceiling_mass_kg: self.safe_ceiling_mass(tanks, safe_ceiling_fraction, density),
        };

        tracing::debug!(
            total_current_mass_kg = summary.total_current_mass_kg,
            minimum_required_mass_kg = summary.minimum_required_mass_kg,
            usable_mass_kg = summary.usable_mass_kg,
            "库存汇总完成"
        );

        summary
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn total_capacity_m3(tanks: &[Tank]) -> f64 {
        tanks.iter().map(|t| t.capacity_m3).sum()
    }
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
