// ==========================================
// GLP 储罐计算系统 - 生产线配置领域模型
// ==========================================
// 职责: 描述当前激活的生产线、每条线的格式/速度/效率
// ==========================================

use crate::domain::types::{LineId, LineSelection};
use serde::{Deserialize, Serialize};

// ==========================================
// Format - 产品格式
// ==========================================
// 每件产品消耗的 GLP 质量 (g/件)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    pub name: String,
    pub grams_per_unit: f64,
}

impl Format {
    pub fn new(name: impl Into<String>, grams_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            grams_per_unit,
        }
    }
}

// ==========================================
// LineSetup - 单条生产线设定
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSetup {
    /// 未选择格式时视为 "尚未配置", 消耗贡献为 0
    pub format: Option<Format>,

    /// 产速 (件/min)
    pub throughput_per_min: f64,

    /// 效率系数 (0, 1], 1.0 表示不折减
    pub efficiency: f64,
}

impl LineSetup {
    pub fn new(format: Option<Format>, throughput_per_min: f64) -> Self {
        Self {
            format,
            throughput_per_min,
            efficiency: 1.0,
        }
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }
}

// ==========================================
// LineConfiguration - 生产线组合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfiguration {
    pub selection: LineSelection,
    pub line_a: LineSetup,
    pub line_b: LineSetup,
}

impl LineConfiguration {
    pub fn new(selection: LineSelection, line_a: LineSetup, line_b: LineSetup) -> Self {
        Self {
            selection,
            line_a,
            line_b,
        }
    }

    pub fn setup(&self, line: LineId) -> &LineSetup {
        match line {
            LineId::LineA => &self.line_a,
            LineId::LineB => &self.line_b,
        }
    }

    /// 当前组合中激活的 (线, 设定) 列表
    pub fn active_setups(&self) -> impl Iterator<Item = (LineId, &LineSetup)> + '_ {
        self.selection
            .active_lines()
            .iter()
            .map(move |line| (*line, self.setup(*line)))
    }
}
