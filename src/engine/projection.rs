// ==========================================
// GLP 储罐计算系统 - 剩余运行时间引擎
// ==========================================
// 规则: minutes = 可用质量 / 消耗速率 (二者均 > 0 时), 否则为 0
// 红线: 零值须区分 "无可用库存" 与 "未配置消耗"; 二者同时成立时以前者为准
// ==========================================

use crate::domain::result::RemainingTime;
use crate::domain::types::RemainingTimeStatus;

pub struct TimeProjectionEngine {}

impl TimeProjectionEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 连续分钟数
    pub fn remaining_minutes(&self, usable_mass_kg: f64, total_rate_kg_per_min: f64) -> f64 {
        if total_rate_kg_per_min > 0.0 && usable_mass_kg > 0.0 {
            usable_mass_kg / total_rate_kg_per_min
        } else {
            0.0
        }
    }

    /// 剩余运行时间 (含状态与 小时/分钟 拆分)
    pub fn project(&self, usable_mass_kg: f64, total_rate_kg_per_min: f64) -> RemainingTime {
        let status = if usable_mass_kg <= 0.0 {
            RemainingTimeStatus::NoUsableInventory
        } else if total_rate_kg_per_min <= 0.0 {
            RemainingTimeStatus::NoConsumptionConfigured
        } else {
            RemainingTimeStatus::Available
        };

        let minutes = self.remaining_minutes(usable_mass_kg, total_rate_kg_per_min);
        let hours = (minutes / 60.0).floor() as u64;
        let remainder_minutes = (minutes % 60.0).floor() as u64;
        let rounded_minutes = (minutes * 100.0).round() / 100.0;

        RemainingTime {
            status,
            minutes,
            hours,
            remainder_minutes,
            rounded_minutes,
        }
    }
}

impl Default for TimeProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_available() {
        let engine = TimeProjectionEngine::new();
        let remaining = engine.project(34549.3, 17.082);
        assert_eq!(remaining.status, RemainingTimeStatus::Available);
        assert!((remaining.minutes - 34549.3 / 17.082).abs() < 1e-9);
        // 2022.56 min = 33 h 42 min
        assert_eq!(remaining.hours, 33);
        assert_eq!(remaining.remainder_minutes, 42);
        assert!((remaining.rounded_minutes - 2022.56).abs() < 1e-9);
    }

    #[test]
    fn test_zero_states_are_distinct() {
        let engine = TimeProjectionEngine::new();
        let no_inventory = engine.project(0.0, 17.0);
        let no_consumption = engine.project(1000.0, 0.0);

        assert_eq!(no_inventory.minutes, 0.0);
        assert_eq!(no_consumption.minutes, 0.0);
        assert_eq!(no_inventory.status, RemainingTimeStatus::NoUsableInventory);
        assert_eq!(no_consumption.status, RemainingTimeStatus::NoConsumptionConfigured);
    }

    #[test]
    fn test_no_inventory_takes_precedence() {
        let engine = TimeProjectionEngine::new();
        let remaining = engine.project(0.0, 0.0);
        assert_eq!(remaining.status, RemainingTimeStatus::NoUsableInventory);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.remainder_minutes, 0);
    }
}
