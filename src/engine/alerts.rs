// ==========================================
// GLP 储罐计算系统 - 单罐液位告警
// ==========================================
// 规则: 单罐充装百分比 <= 储备百分比 → 告警
// 仅作提示, 不影响按合计容积计算的储备下限
// ==========================================

use crate::domain::result::TankAlert;
use crate::domain::tank::Tank;

pub fn low_level_alerts(tanks: &[Tank], reserve_threshold: f64) -> Vec<TankAlert> {
    let reserve_percent = reserve_threshold * 100.0;
    tanks
        .iter()
        .filter(|tank| tank.fill_percent() <= reserve_percent)
        .map(|tank| {
            tracing::warn!(
                tank = %tank.name,
                fill_percent = tank.fill_percent(),
                "储罐液位处于或低于储备下限"
            );
            TankAlert {
                name: tank.name.clone(),
                fill_percent: tank.fill_percent(),
                reserve_percent,
            }
        })
        .collect()
}
