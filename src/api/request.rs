// ==========================================
// GLP 储罐计算系统 - 计算请求
// ==========================================
// 展示层提交的原始输入: 百分比以 0-100 表示, 格式以名称表示
// 可选字段缺省时使用配置默认值
// ==========================================

use crate::config::plant_config::PlantConfig;
use crate::domain::types::LineSelection;
use crate::engine::strategy::AdmissionPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    /// 各储罐充装百分比, 顺序与配置中的储罐一致
    pub tank_fill_pct: Vec<f64>,
    /// 储备下限百分比
    pub reserve_min_pct: Option<f64>,
    pub line_selection: LineSelection,
    pub line_a_format: Option<String>,
    pub line_b_format: Option<String>,
    pub line_a_speed: Option<f64>,
    pub line_b_speed: Option<f64>,
    pub line_a_efficiency_pct: Option<f64>,
    pub line_b_efficiency_pct: Option<f64>,
    pub density_kg_per_m3: Option<f64>,
    pub truck_capacity_kg: Option<f64>,
    pub safe_ceiling_pct: Option<f64>,
    pub admission_policy: Option<AdmissionPolicy>,
}

impl CalculationRequest {
    /// 默认请求: 各罐 85%, 仅 LineA, 使用其第一个格式
    pub fn default_for(config: &PlantConfig) -> Self {
        Self {
            tank_fill_pct: vec![85.0; config.tanks.len()],
            line_selection: LineSelection::LineAOnly,
            line_a_format: config.line_a.default_format().map(|f| f.name.clone()),
            line_b_format: config.line_b.default_format().map(|f| f.name.clone()),
            ..Self::default()
        }
    }
}
