// ==========================================
// GLP 储罐计算系统 - 储罐领域模型
// ==========================================
// 红线: 充装率独立于每个储罐, 取值 [0, 1]
// 用途: 每次计算从输入快照构造, 构造后不再修改
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Tank - 储罐快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub name: String,        // 储罐名称
    pub capacity_m3: f64,    // 额定容积 (m³)
    pub fill_fraction: f64,  // 当前充装率 (0.0 - 1.0)
}

impl Tank {
    pub fn new(name: impl Into<String>, capacity_m3: f64, fill_fraction: f64) -> Self {
        Self {
            name: name.into(),
            capacity_m3,
            fill_fraction,
        }
    }

    /// 以百分比 (0-100) 构造储罐快照
    pub fn from_percent(name: impl Into<String>, capacity_m3: f64, fill_pct: f64) -> Self {
        Self::new(name, capacity_m3, fill_pct / 100.0)
    }

    /// 当前液位对应体积 (m³)
    pub fn current_volume_m3(&self) -> f64 {
        self.capacity_m3 * self.fill_fraction
    }

    /// 当前充装百分比 (0-100)
    pub fn fill_percent(&self) -> f64 {
        self.fill_fraction * 100.0
    }
}
